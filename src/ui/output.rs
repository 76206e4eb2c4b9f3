//! Output functions for consistent CLI formatting

use super::context::UiContext;
use console::style;

/// Display a heading
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        println!("{}", style(title).cyan().bold());
    } else {
        println!("{}", title);
    }
    println!();
}

/// Display a success step
pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("✓").green(), message);
    } else {
        println!("[OK] {}", message);
    }
}

/// Display an informational step
pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("•").blue(), message);
    } else {
        println!("[INFO] {}", message);
    }
}

/// Display a warning with an actionable hint
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("!").yellow(), message);
        println!("  {}", style(hint).dim());
    } else {
        println!("[WARN] {}", message);
        println!("       {}", hint);
    }
}
