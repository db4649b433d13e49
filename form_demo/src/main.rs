//! Headless form demo
//!
//! Builds a small sign-up form, feeds it a scripted sequence of keyboard and
//! mouse frames and logs what each frame drew.
//!
//! Usage: `form_demo [style.toml|style.ron] [panel.png]`

use std::cell::Cell;
use std::rc::Rc;

use ui_kit::foundation::logging::{self, debug, info};
use ui_kit::prelude::*;

/// Input applied to one scripted frame
type Step = fn(&mut FrameInput);

/// Scripted frames: type a name, tab to the checkbox, toggle it, click the button
const SCRIPT: &[(&str, Step)] = &[
    ("idle", |_| {}),
    ("type name", |input| input.keyboard.type_text("ada")),
    ("tab", |input| input.keyboard.press(Keys::TAB)),
    ("release tab", |input| input.keyboard.release(Keys::TAB)),
    ("space", |input| input.keyboard.press(Keys::SPACE)),
    ("release space", |input| input.keyboard.release(Keys::SPACE)),
    ("hover button", |input| input.mouse.move_to(150.0, 175.0)),
    ("click button", |input| input.mouse.set_left_button(true)),
    ("release button", |input| input.mouse.set_left_button(false)),
    ("shift+tab", |input| input.keyboard.press(Keys::TAB | Keys::LEFT_SHIFT)),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    info!("Starting form demo");

    let mut args = std::env::args().skip(1);
    let style = match args.next() {
        Some(path) => UiStyle::load_from_file(&path)?,
        None => UiStyle::default(),
    };
    let panel = match args.next() {
        Some(path) => Texture::from_file(path)?,
        None => Texture::solid_color(18, 18, [255, 255, 255, 255]),
    };
    let skin = Skin::new(&panel, &style)?;

    let mut form: Form = Form::new();
    let name = form.add_widget(Box::new(LabeledTextInput::new(
        Vec2::new(20.0, 20.0),
        260.0,
        "Name",
        Some("Your name".to_string()),
        "",
        &style,
    )))?;
    let newsletter = form.add_widget(Box::new(LabeledCheckbox::new(
        Vec2::new(20.0, 100.0),
        260.0,
        "Subscribe to newsletter",
        false,
        false,
        &style,
    )))?;

    let submitted = Rc::new(Cell::new(false));
    let flag = Rc::clone(&submitted);
    form.add_widget(Box::new(
        LargeButton::new(Rect::new(20.0, 150.0, 260.0, style.button_height), "Sign up")
            .on_click(move || flag.set(true)),
    ))?;

    let mut input = FrameInput::default();
    let mut surface = RecordingSurface::new();
    let mut feedback = RecordingFeedback::new();

    for (frame, (label, step)) in SCRIPT.iter().enumerate() {
        input.advance();
        step(&mut input);

        form.update(&mut input, &mut feedback)?;
        surface.clear();
        form.draw(&mut surface, &skin, &input, &style, &mut feedback);

        info!(
            "frame {frame} ({label}): {} sprites, texts {:?}",
            surface.sprites().count(),
            surface.texts().map(|t| t.text.as_str()).collect::<Vec<_>>()
        );
        debug!("focused target: {:?}", form.focus_group().focused());
    }

    let name_value = form
        .get::<LabeledTextInput>(name)
        .map(|field| field.input.value.clone())
        .unwrap_or_default();
    let subscribed = form
        .get::<LabeledCheckbox>(newsletter)
        .is_some_and(|row| row.checkbox.checked);

    info!(
        "Result: name={name_value:?} subscribed={subscribed} submitted={} feedback cues={}",
        submitted.get(),
        feedback.count()
    );
    Ok(())
}
