use cairo::Context;
use snakespin::Indicator;
use snakespin::geometry::VIEWBOX_SIZE;
use snakespin::paint;

/// Paints the indicator centered in a `width` x `height` area, scaled to its `size`.
pub fn draw(
    cr: &Context,
    indicator: &Indicator,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let params = indicator.params();
    let size = params.size;
    let scale = size / VIEWBOX_SIZE;

    cr.save()?;
    cr.translate((width - size) / 2.0, (height - size) / 2.0);
    cr.scale(scale, scale);
    paint::paint(cr, &indicator.frame(), params)?;
    cr.restore()
}
