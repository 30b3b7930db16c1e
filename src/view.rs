// ABOUTME: UI surface contract for the job lifecycle controller
// ABOUTME: Terminal implementation renders progress with indicatif

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Display surface driven by the lifecycle controller.
///
/// Mirrors the panel page's collaborator contract: a confirmation
/// prompt, a progress display (visibility, fraction bar, text label), a
/// completion display with a download target, and a synchronous error
/// notification. The controller only toggles and updates these; how the
/// prompt itself collects an answer is the caller's concern.
pub trait PanelView {
    fn show_confirm(&mut self);
    fn hide_confirm(&mut self);

    /// Reveal the progress display with an initial indeterminate label.
    fn show_progress(&mut self, label: &str);
    /// Update the fraction bar width (0-100) and the text label.
    fn set_progress(&mut self, percent: f64, label: &str);
    fn hide_progress(&mut self);

    /// Reveal the completion display pointing at the finished file.
    fn show_done(&mut self, download_url: &str);
    fn hide_done(&mut self);

    /// Blocking notification of a failure, the page's `alert` analogue.
    fn notify_error(&mut self, message: &str);
}

/// Terminal implementation of [`PanelView`].
///
/// Presentation only; all lifecycle decisions live in the controller.
pub struct TermView {
    bar: Option<ProgressBar>,
}

impl TermView {
    pub fn new() -> Self {
        Self { bar: None }
    }
}

impl Default for TermView {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelView for TermView {
    fn show_confirm(&mut self) {
        // The interactive prompt is rendered by the caller (dialoguer).
    }

    fn hide_confirm(&mut self) {}

    fn show_progress(&mut self, label: &str) {
        let bar = self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::with_template("{bar:40.cyan/blue} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        });
        bar.set_position(0);
        bar.set_message(label.to_string());
    }

    fn set_progress(&mut self, percent: f64, label: &str) {
        if let Some(bar) = &self.bar {
            bar.set_position(percent.clamp(0.0, 100.0) as u64);
            bar.set_message(label.to_string());
        }
    }

    fn hide_progress(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn show_done(&mut self, download_url: &str) {
        println!(
            "{} {}",
            style("Download ready:").green().bold(),
            download_url
        );
    }

    fn hide_done(&mut self) {
        // Nothing persistent to clear in a scrolling terminal.
    }

    fn notify_error(&mut self, message: &str) {
        // Route through the bar when one is up so the line is not
        // overdrawn by the next redraw.
        match &self.bar {
            Some(bar) => bar.println(format!("{} {}", style("error:").red().bold(), message)),
            None => eprintln!("{} {}", style("error:").red().bold(), message),
        }
    }
}
