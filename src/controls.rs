use crate::constants::*;
use crate::dom;
use crate::shell::{self, Shell};
use focalsim_core::{field_of_view_deg, Message, Ratio, Simulator, FOCAL_MAX_MM, FOCAL_MIN_MM};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Sensor/aspect pickers, orientation toggle, focal slider, quick-select
/// buttons and the shutter. Holds elements only; listeners are attached by
/// [`wire`] once the shell exists.
pub struct Controls {
    root: web::HtmlElement,
    sensor_select: web::HtmlSelectElement,
    aspect_select: web::HtmlSelectElement,
    orientation_btn: web::HtmlButtonElement,
    focal_slider: web::HtmlInputElement,
    focal_value: web::HtmlElement,
    fov_value: web::HtmlElement,
    quick_select: web::HtmlElement,
    shutter_btn: web::HtmlButtonElement,
}

impl Controls {
    pub fn new(document: &web::Document, sim: &Simulator) -> anyhow::Result<Self> {
        let catalog = sim.catalog();
        let state = sim.state();
        let root = dom::div(document, CONTROLS_CLASS)?;

        // Row 1: sensor, aspect, orientation
        let row1 = dom::div(document, &format!("{} row1", CONTROL_ROW_CLASS))?;
        let sensor_label = dom::text(document, "label", "sensor-select-label", "Sensor: ")?;
        dom::append(&row1, &sensor_label);
        let sensor_select =
            dom::create::<web::HtmlSelectElement>(document, "select", SENSOR_SELECT_CLASS)?;
        for (i, sensor) in catalog.sensors().iter().enumerate() {
            let opt =
                web::HtmlOptionElement::new_with_text_and_value(&sensor.name, &i.to_string())
                    .map_err(dom::js_err)?;
            dom::append(&sensor_select, &opt);
        }
        dom::append(&row1, &sensor_select);
        dom::append(&row1, &dom::div(document, "spacer")?);

        let aspect_label = dom::text(document, "label", "aspect-select-label", "Aspect Ratio: ")?;
        dom::append(&row1, &aspect_label);
        let aspect_select =
            dom::create::<web::HtmlSelectElement>(document, "select", ASPECT_SELECT_CLASS)?;
        for aspect in catalog.aspects() {
            let opt = web::HtmlOptionElement::new_with_text_and_value(
                &aspect.label,
                &aspect.ratio.to_string(),
            )
            .map_err(dom::js_err)?;
            dom::append(&aspect_select, &opt);
        }
        dom::append(&row1, &aspect_select);

        let orientation_btn =
            dom::create::<web::HtmlButtonElement>(document, "button", TOGGLE_ORIENTATION_CLASS)?;
        orientation_btn.set_text_content(Some(orientation_label(state.orientation_flipped)));
        dom::append(&row1, &orientation_btn);

        // Row 2: focal slider and readouts
        let row2 = dom::div(document, &format!("{} row2", CONTROL_ROW_CLASS))?;
        let focal_label_el = dom::text(document, "label", "focal-label", "Focal Length (mm): ")?;
        dom::append(&row2, &focal_label_el);
        let focal_slider =
            dom::create::<web::HtmlInputElement>(document, "input", FOCAL_SLIDER_CLASS)?;
        focal_slider.set_type("range");
        focal_slider.set_min(&FOCAL_MIN_MM.to_string());
        focal_slider.set_max(&FOCAL_MAX_MM.to_string());
        focal_slider.set_value(&state.focal_mm.to_string());
        dom::append(&row2, &focal_slider);
        let focal_value =
            dom::text(document, "span", FOCAL_VALUE_CLASS, &focal_label(state.focal_mm))?;
        dom::append(&row2, &focal_value);
        let fov_value = dom::text(document, "span", FOV_VALUE_CLASS, "")?;
        dom::append(&row2, &fov_value);

        // Row 3: quick-select focals (filled by sync)
        let row3 = dom::div(document, &format!("{} row3", CONTROL_ROW_CLASS))?;
        let quick_select = dom::div(document, QUICK_SELECT_CLASS)?;
        dom::append(&row3, &quick_select);

        let left = dom::div(document, LEFT_CONTROLS_CLASS)?;
        dom::append(&left, &row1);
        dom::append(&left, &row2);
        dom::append(&left, &row3);

        let right = dom::div(document, RIGHT_CONTROLS_CLASS)?;
        let shutter_btn =
            dom::create::<web::HtmlButtonElement>(document, "button", SHUTTER_CLASS)?;
        shutter_btn.set_text_content(Some(SHUTTER_LABEL));
        dom::append(&right, &shutter_btn);

        let main_row = dom::div(document, &format!("{} main-row", CONTROL_ROW_CLASS))?;
        dom::append(&main_row, &left);
        dom::append(&main_row, &right);
        dom::append(&root, &main_row);

        Ok(Self {
            root,
            sensor_select,
            aspect_select,
            orientation_btn,
            focal_slider,
            focal_value,
            fov_value,
            quick_select,
            shutter_btn,
        })
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.root
    }

    /// Push current simulator state into every control.
    pub fn sync(&self, shell: &Rc<Shell>) {
        let sim = shell.sim.borrow();
        let catalog = sim.catalog();
        let state = sim.state();

        self.sensor_select.set_value(&state.sensor.to_string());
        // Flipped ratios are usually absent from the list; keep the old pick then.
        if catalog.aspect_entry(state.aspect).is_some() {
            self.aspect_select.set_value(&state.aspect.to_string());
        }
        self.orientation_btn
            .set_text_content(Some(orientation_label(state.orientation_flipped)));
        self.focal_slider.set_value(&state.focal_mm.to_string());
        self.focal_value
            .set_text_content(Some(&focal_label(state.focal_mm)));
        if let Some(sensor) = catalog.sensor(state.sensor) {
            let fov = field_of_view_deg(state.focal_mm, sensor.width_mm);
            self.fov_value.set_text_content(Some(&fov_label(fov)));
        }

        self.quick_select.set_inner_html("");
        for quick in state.quick_focals(catalog) {
            let btn = match dom::create::<web::HtmlButtonElement>(
                &shell.document,
                "button",
                QUICK_SELECT_BTN_CLASS,
            ) {
                Ok(b) => b,
                Err(e) => {
                    log::error!("[controls] quick-select button: {:?}", e);
                    return;
                }
            };
            btn.set_text_content(Some(&focal_label(quick.focal_mm)));
            _ = btn.set_attribute(FOCAL_DATA_ATTR, &quick.focal_mm.to_string());
            if quick.active {
                _ = btn.class_list().add_1(ACTIVE_CLASS);
            }
            dom::append(&self.quick_select, &btn);
        }
    }
}

pub fn wire(shell: &Rc<Shell>) {
    let c = &shell.controls;

    let shell_s = shell.clone();
    let select = c.sensor_select.clone();
    dom::add_listener(&c.sensor_select, "change", move |_| {
        match select.value().parse::<usize>() {
            Ok(i) => shell::dispatch(&shell_s, Message::SelectSensor(i)),
            Err(_) => log::warn!("[controls] bad sensor value '{}'", select.value()),
        }
    });

    let shell_a = shell.clone();
    let select = c.aspect_select.clone();
    dom::add_listener(&c.aspect_select, "change", move |_| {
        match select.value().parse::<Ratio>() {
            Ok(ratio) => shell::dispatch(&shell_a, Message::SelectAspect(ratio)),
            Err(e) => log::warn!("[controls] {}", e),
        }
    });

    let shell_o = shell.clone();
    dom::add_listener(&c.orientation_btn, "click", move |_| {
        shell::dispatch(&shell_o, Message::ToggleOrientation);
    });

    let shell_f = shell.clone();
    let slider = c.focal_slider.clone();
    dom::add_listener(&c.focal_slider, "input", move |_| {
        if let Ok(focal) = slider.value().parse::<f64>() {
            shell::dispatch(&shell_f, Message::SetFocal(focal));
        }
    });

    // Buttons are rebuilt on every sync, so one delegated listener serves them all.
    let shell_q = shell.clone();
    dom::add_listener(&c.quick_select, "click", move |ev| {
        let focal = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.get_attribute(FOCAL_DATA_ATTR))
            .and_then(|v| v.parse::<f64>().ok());
        if let Some(focal) = focal {
            shell::dispatch(&shell_q, Message::QuickFocal(focal));
        }
    });

    let shell_sh = shell.clone();
    dom::add_listener(&c.shutter_btn, "click", move |_| {
        shell::dispatch(&shell_sh, Message::Shutter);
    });
}
