mod render;

use std::io::Write as _;

use riskview_engine::view::ViewState;
use riskview_runtime::bootstrap::build_controller_from_env;
use riskview_runtime::env::API_BASE_ENV;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let controller = build_controller_from_env()?;

    println!("AI Risk Explorer");
    println!("Compare two model answers to the same prompt and surface simple risk signals.");
    println!("Set {API_BASE_ENV} to point at a comparison service (default http://localhost:8000).");
    println!("Type a prompt and press Enter; Ctrl-D exits.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("prompt> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        controller.update_prompt(line).await;
        if !controller.can_submit().await {
            println!("(enter a non-empty prompt)");
            continue;
        }

        controller
            .submit_comparison_with_hook(|state: ViewState| async move {
                if state.is_in_flight() {
                    println!("Comparing...");
                } else {
                    print!("{}", render::render_view(&state));
                }
            })
            .await;
        println!();
    }

    println!("This tool is for learning. Always verify important information.");
    Ok(())
}
