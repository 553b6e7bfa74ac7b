use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

use mindcare_widget::config::WidgetConfig;
use mindcare_widget::logging;
use mindcare_widget::message::HealthForm;
use mindcare_widget::services::prediction_client::HttpPredictionClient;
use mindcare_widget::widget::console::ConsoleView;
use mindcare_widget::widget::transcript::Transcript;
use mindcare_widget::widget::{ChatWidget, Key};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();
    let config =
        WidgetConfig::from_env().inspect_err(|e| error!(error = %e, "bad configuration"))?;
    info!(endpoint = %config.endpoint, "MindCare chat ready");

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("--- A few health questions first (Enter to skip) ---");
    let form = ask_form(&mut input).await?;

    let view = ConsoleView::stdout(Transcript::with_form(form));
    let widget = ChatWidget::new(view, HttpPredictionClient::from_config(&config));

    println!("\nTell me how you are feeling right now. (/quit to leave)");
    while let Some(line) = input.next_line().await.context("reading stdin")? {
        if line.trim() == "/quit" {
            break;
        }
        widget.view().transcript().type_text(&line);
        widget.handle_key(Key::Enter).await;
    }

    Ok(())
}

async fn ask_form(input: &mut Input) -> anyhow::Result<HealthForm> {
    Ok(HealthForm {
        age: ask(input, "Age (e.g. 25)").await?,
        sleep: ask(input, "Sleep quality (0-10)").await?,
        physical: ask(input, "Physical activity (minutes/day)").await?,
        screen: ask(input, "Screen time (hours/day)").await?,
        stress: ask(input, "Stress level (1-3)").await?,
        smoking: ask(input, "Do you smoke? (Yes/No)").await?,
    })
}

async fn ask(input: &mut Input, question: &str) -> anyhow::Result<String> {
    print!("{question}: ");
    std::io::stdout().flush()?;
    let answer = input.next_line().await.context("reading stdin")?;
    Ok(answer.unwrap_or_default().trim().to_string())
}
