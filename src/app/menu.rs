use crate::core::report::Console;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HEADER: &str = "Rust-API-Demo-Project";

pub struct MenuEntry {
    pub key: &'static str,
    pub demo: Box<dyn Demo>,
}

impl MenuEntry {
    pub fn new(key: &'static str, demo: Box<dyn Demo>) -> Self {
        Self { key, demo }
    }
}

fn is_quit(choice: &str) -> bool {
    matches!(choice, "q" | "esc" | "\u{1b}")
}

/// Line based console menu; runs until `q`/`esc` or end of input.
///
/// A failing demo is reported and the menu continues.
pub async fn run_menu<R>(mut input: R, console: &Console, entries: &[MenuEntry]) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    console.println(HEADER)?;
    console.println(&"=".repeat(HEADER.len()))?;

    loop {
        console.println("Run one of the following examples:")?;
        for entry in entries {
            console.println(&format!("{:<3} - {}", entry.key, entry.demo.name()))?;
        }
        console.println("esc - End the program")?;
        console.print("Enter your choice: ")?;

        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            // EOF
            console.println("")?;
            break;
        }

        let choice = line.trim().to_lowercase();
        if is_quit(&choice) {
            break;
        }

        let Some(entry) = entries.iter().find(|entry| entry.key == choice) else {
            continue;
        };

        tracing::info!("▶️ Running demo: {}", entry.demo.name());
        if let Err(e) = entry.demo.run().await {
            tracing::error!(
                "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
                entry.demo.name(),
                e,
                e.category(),
                e.severity()
            );
            console.println(&format!("❌ {}", e.user_friendly_message()))?;
            console.println(&format!("💡 {}", e.recovery_suggestion()))?;
        }
        console.println("")?;
    }

    Ok(())
}
