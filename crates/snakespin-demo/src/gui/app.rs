use crate::config;
use crate::events::AppEvent;
use crate::gui::canvas;
use crate::gui::theme;
use crate::gui::timer::TickTimer;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use snakespin::{Color, Indicator, Params, Pattern, TICK_INTERVAL};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use strum::IntoEnumIterator;

const SLIDER_WIDTH: i32 = 128;

#[derive(Debug, Clone, Copy)]
struct SliderRange {
    min: f64,
    max: f64,
    step: f64,
}

impl SliderRange {
    /// Clamps to the range and rounds to the nearest step, trimming float noise
    /// so 0.7 stays exactly 0.7.
    fn snap(&self, value: f64) -> f64 {
        let stepped = (value.clamp(self.min, self.max) / self.step).round() * self.step;
        (stepped * 100.0).round() / 100.0
    }
}

const LENGTH_SLIDER: SliderRange = SliderRange {
    min: 0.1,
    max: 0.9,
    step: 0.05,
};
const SIZE_SLIDER: SliderRange = SliderRange {
    min: 60.0,
    max: 480.0,
    step: 20.0,
};
const SPEED_SLIDER: SliderRange = SliderRange {
    min: 0.5,
    max: 3.0,
    step: 0.5,
};

fn length_label(length: f64) -> String {
    format!("{}%", (length * 100.0).round())
}

fn size_label(size: f64) -> String {
    format!("{}px", size)
}

fn speed_label(speed: f64) -> String {
    format!("{}x", speed)
}

/// Held while the model writes values into the widgets, so the change
/// signals those writes emit are not read back as user input.
#[derive(Debug, Clone, Default)]
pub struct SyncGuard(Rc<Cell<bool>>);

impl SyncGuard {
    fn hold<R>(&self, f: impl FnOnce() -> R) -> R {
        let was_held = self.0.replace(true);
        let result = f();
        self.0.set(was_held);
        result
    }

    fn user_input(&self, msg: AppMsg) -> Option<AppMsg> {
        (!self.0.get()).then_some(msg)
    }

    fn forward(&self, sender: &ComponentSender<AppModel>, msg: AppMsg) {
        if let Some(msg) = self.user_input(msg) {
            sender.input(msg);
        }
    }
}

/// Handles to the input widgets, kept so a config reload can move them.
pub struct Controls {
    pattern: gtk::DropDown,
    length: gtk::Scale,
    size: gtk::Scale,
    speed: gtk::Scale,
    color: gtk::ColorButton,
    guard: SyncGuard,
}

impl Controls {
    fn sync(&self, params: &Params) {
        self.guard.hold(|| {
            self.pattern.set_selected(params.pattern.as_index() as u32);
            self.length.set_value(params.length);
            self.size.set_value(params.size);
            self.speed.set_value(params.speed);
            self.color.set_rgba(&theme::to_rgba(params.color));
        });
    }
}

pub struct AppModel {
    pub indicator: Rc<RefCell<Indicator>>,
    pub params: Params,
    pub timer: Option<TickTimer>,
    pub drawing_area: gtk::DrawingArea,
    pub controls: Option<Controls>,
    pub sync_guard: SyncGuard,
}

#[derive(Debug)]
pub enum AppMsg {
    Tick,
    SetPattern(Pattern),
    SetLength(f64),
    SetSize(f64),
    SetSpeed(f64),
    SetColor(Color),
    EditConfig,
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    /// (Re)arms the tick timer. The previous timer, if any, is removed first.
    fn start_timer(&mut self, sender: &ComponentSender<Self>) {
        self.timer = None;
        let sender = sender.clone();
        self.timer = Some(TickTimer::start(TICK_INTERVAL, move || {
            sender.input(AppMsg::Tick);
        }));
    }

    fn apply(&mut self, params: Params, sender: &ComponentSender<Self>) {
        if params == self.params {
            return;
        }

        let restart_timer =
            params.speed != self.params.speed || params.length != self.params.length;
        self.indicator.borrow_mut().set_params(params.clone());
        self.params = params;

        if restart_timer {
            self.start_timer(sender);
        }
        self.drawing_area.queue_draw();
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Params, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("snakespin"),
            set_default_size: (720, 640),
            add_css_class: "snakespin-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 48,
                set_margin_all: 32,
                set_halign: gtk::Align::Center,
                set_valign: gtk::Align::Center,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_halign: gtk::Align::Center,
                    #[watch]
                    set_content_width: model.params.size as i32,
                    #[watch]
                    set_content_height: model.params.size as i32,
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 24,
                    set_halign: gtk::Align::Center,
                    add_css_class: "snakespin-controls",

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 8,

                        gtk::Label {
                            set_label: "Pattern",
                            set_xalign: 0.0,
                        },

                        #[name = "pattern"]
                        gtk::DropDown::from_strings(&pattern_labels) {
                            set_width_request: SLIDER_WIDTH,
                            set_selected: model.params.pattern.as_index() as u32,
                            connect_selected_notify[sender, guard = model.sync_guard.clone()] => move |dropdown| {
                                if let Some(pattern) = Pattern::from_index(dropdown.selected() as usize) {
                                    guard.forward(&sender, AppMsg::SetPattern(pattern));
                                }
                            },
                        },
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 8,

                        gtk::Label {
                            set_label: "Length",
                            set_xalign: 0.0,
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_spacing: 8,

                            #[name = "length"]
                            gtk::Scale::with_range(
                                gtk::Orientation::Horizontal,
                                LENGTH_SLIDER.min,
                                LENGTH_SLIDER.max,
                                LENGTH_SLIDER.step,
                            ) {
                                set_width_request: SLIDER_WIDTH,
                                set_digits: 2,
                                set_draw_value: false,
                                set_value: model.params.length,
                                connect_value_changed[sender, guard = model.sync_guard.clone()] => move |scale| {
                                    guard.forward(&sender, AppMsg::SetLength(scale.value()));
                                },
                            },

                            gtk::Label {
                                add_css_class: "value-label",
                                #[watch]
                                set_label: &length_label(model.params.length),
                            },
                        },
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 8,

                        gtk::Label {
                            set_label: "Size",
                            set_xalign: 0.0,
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_spacing: 8,

                            #[name = "size"]
                            gtk::Scale::with_range(
                                gtk::Orientation::Horizontal,
                                SIZE_SLIDER.min,
                                SIZE_SLIDER.max,
                                SIZE_SLIDER.step,
                            ) {
                                set_width_request: SLIDER_WIDTH,
                                set_draw_value: false,
                                set_value: model.params.size,
                                connect_value_changed[sender, guard = model.sync_guard.clone()] => move |scale| {
                                    guard.forward(&sender, AppMsg::SetSize(scale.value()));
                                },
                            },

                            gtk::Label {
                                add_css_class: "value-label",
                                #[watch]
                                set_label: &size_label(model.params.size),
                            },
                        },
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 8,

                        gtk::Label {
                            set_label: "Speed",
                            set_xalign: 0.0,
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_spacing: 8,

                            #[name = "speed"]
                            gtk::Scale::with_range(
                                gtk::Orientation::Horizontal,
                                SPEED_SLIDER.min,
                                SPEED_SLIDER.max,
                                SPEED_SLIDER.step,
                            ) {
                                set_width_request: SLIDER_WIDTH,
                                set_digits: 1,
                                set_draw_value: false,
                                set_value: model.params.speed,
                                connect_value_changed[sender, guard = model.sync_guard.clone()] => move |scale| {
                                    guard.forward(&sender, AppMsg::SetSpeed(scale.value()));
                                },
                            },

                            gtk::Label {
                                add_css_class: "value-label",
                                #[watch]
                                set_label: &speed_label(model.params.speed),
                            },
                        },
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 8,

                        gtk::Label {
                            set_label: "Color",
                            set_xalign: 0.0,
                        },

                        #[name = "color"]
                        gtk::ColorButton {
                            set_width_request: SLIDER_WIDTH,
                            set_rgba: &theme::to_rgba(model.params.color),
                            connect_color_set[sender] => move |button| {
                                sender.input(AppMsg::SetColor(theme::color_from_rgba(&button.rgba())));
                            },
                        },
                    },
                },

                gtk::Button {
                    set_label: "Edit config",
                    set_halign: gtk::Align::Center,
                    connect_clicked => AppMsg::EditConfig,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (params, rx) = init;

        theme::load_css();

        let pattern_names: Vec<String> = Pattern::iter().map(|p| p.to_string()).collect();
        let pattern_labels: Vec<&str> = pattern_names.iter().map(String::as_str).collect();

        let model = AppModel {
            indicator: Rc::new(RefCell::new(Indicator::new(params.clone()))),
            params,
            timer: None,
            drawing_area: gtk::DrawingArea::default(),
            controls: None,
            sync_guard: SyncGuard::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.controls = Some(Controls {
            pattern: widgets.pattern.clone(),
            length: widgets.length.clone(),
            size: widgets.size.clone(),
            speed: widgets.speed.clone(),
            color: widgets.color.clone(),
            guard: model.sync_guard.clone(),
        });

        let indicator_draw = model.indicator.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                if let Err(e) =
                    canvas::draw(cr, &indicator_draw.borrow(), width as f64, height as f64)
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        model.start_timer(&sender);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tick => {
                self.indicator.borrow_mut().tick();
                self.drawing_area.queue_draw();
            }
            AppMsg::SetPattern(pattern) => {
                let params = Params {
                    pattern,
                    ..self.params.clone()
                };
                self.apply(params, &sender);
            }
            AppMsg::SetLength(length) => {
                let params = Params {
                    length: LENGTH_SLIDER.snap(length),
                    ..self.params.clone()
                };
                self.apply(params, &sender);
            }
            AppMsg::SetSize(size) => {
                let params = Params {
                    size: SIZE_SLIDER.snap(size),
                    ..self.params.clone()
                };
                self.apply(params, &sender);
            }
            AppMsg::SetSpeed(speed) => {
                let params = Params {
                    speed: SPEED_SLIDER.snap(speed),
                    ..self.params.clone()
                };
                self.apply(params, &sender);
            }
            AppMsg::SetColor(color) => {
                let params = Params {
                    color,
                    ..self.params.clone()
                };
                self.apply(params, &sender);
            }
            AppMsg::EditConfig => match config::write_default_config() {
                Ok(path) => {
                    if let Err(e) = std::process::Command::new("xdg-open").arg(&path).spawn() {
                        log::error!("Failed to open {}: {}", path.display(), e);
                    }
                }
                Err(e) => log::error!("Failed to write default config: {}", e),
            },
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.apply(new_config.indicator, &sender);
                    if let Some(controls) = &self.controls {
                        controls.sync(&self.params);
                    }
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => {
                self.timer = None;
                relm4::main_application().quit();
            }
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        self.timer = None;
    }
}
