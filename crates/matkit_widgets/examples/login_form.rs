//! Login Form Demo
//!
//! Drives a themed login form headlessly:
//! - an email field and a secure password field with floating labels
//! - a multi-line notes view with a caption
//! - a rippling sign-in button that shows its loader for a moment
//!
//! Every frame is painted into a recording context and the draw command
//! counts are printed.
//!
//! Run with: RUST_LOG=debug cargo run -p matkit_widgets --example login_form

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use matkit_core::{Point, RecordingContext, Size};
use matkit_widgets::prelude::*;
use matkit_widgets::Result;

const THEME: &str = r##"
[text_field]
corner_radius = 10.0
active_border_color = "#FF8000"
inactive_border_color = "#555555"

[text_view]
active_border_color = "#3380E6"

[button]
corner_radius = 8.0
ripple = true
"##;

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let theme = ThemeConfig::from_toml_str(THEME)?;
    let measurer: Arc<dyn TextMeasurer> = Arc::new(EstimatedTextMeasurer);

    let (mut email, email_focus) =
        MaterialTextField::new(theme.text_field_style()?, "Email", Arc::clone(&measurer));
    email.set_size(Size::new(280.0, 44.0));

    let (mut password, password_focus) =
        MaterialTextField::new(theme.text_field_style()?, "Password", Arc::clone(&measurer));
    password.set_size(Size::new(280.0, 44.0));
    password.set_secure(true);

    let (mut notes, notes_focus) =
        MaterialTextView::new(theme.text_view_style()?, "Anything else?", Arc::clone(&measurer));
    notes.set_caption("Notes");
    notes.set_size(Size::new(280.0, 80.0));

    let submitted = Arc::new(AtomicBool::new(false));
    let mut sign_in = MaterialButton::new("Sign in", theme.button_style()?);
    sign_in.set_size(Size::new(280.0, 48.0));
    let flag = Arc::clone(&submitted);
    sign_in.on_tap(move || flag.store(true, Ordering::SeqCst));

    // Email: focus, type, blur
    email_focus.focus_gained()?;
    email.process_focus_events();
    email.insert_text("someone@example");
    email_focus.focus_lost()?;
    email.process_focus_events();

    // Password: focus, type, leave focused
    password_focus.focus_gained()?;
    password.process_focus_events();
    password.insert_text("hunter2");

    // Notes: focus and blur without typing
    notes_focus.focus_gained()?;
    notes.process_focus_events();
    notes_focus.focus_lost()?;
    notes.process_focus_events();

    if !email.text().contains('.') {
        email.show_error_message("Please enter a valid email address", true);
    }

    // Tap the button and show the loader for half a second
    sign_in.begin_tracking(Point::new(140.0, 24.0));
    sign_in.end_tracking(true);
    sign_in.show_loader_for(0.5, false);

    let mut ctx = RecordingContext::new();
    for frame in 0..60 {
        email.update(FRAME);
        password.update(FRAME);
        notes.update(FRAME);
        sign_in.update(FRAME);

        if frame % 15 == 0 {
            ctx.clear();
            email.paint(&mut ctx);
            let email_cmds = ctx.take_commands().len();
            password.paint(&mut ctx);
            let password_cmds = ctx.take_commands().len();
            notes.paint(&mut ctx);
            let notes_cmds = ctx.take_commands().len();
            sign_in.paint(&mut ctx);
            let button_cmds = ctx.take_commands().len();

            println!(
                "frame {frame:>2}: email={email_cmds} password={password_cmds} \
                 notes={notes_cmds} button={button_cmds} loading={}",
                sign_in.is_loading()
            );
        }
    }

    println!(
        "email label floated: {}, password shown as {:?}, submitted: {}",
        email.instruction().label.is_floated(),
        password.display_text(),
        submitted.load(Ordering::SeqCst)
    );

    Ok(())
}
