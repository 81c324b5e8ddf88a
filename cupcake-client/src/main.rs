use std::sync::Arc;

use anyhow::Context;
use cupcake_client::HttpTransport;
use cupcake_core::app_config::Config;
use cupcake_core::{flavor, OrderEdit, OrderForm, FLAVORS, MAX_QUANTITY, MIN_QUANTITY};
use cupcake_order::{Outcome, SubmissionService};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cupcake=info,cupcake_order=debug,cupcake_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Placing orders with {}", config.client.endpoint);

    let transport = Arc::new(HttpTransport::new(config.client.endpoint.clone()));
    let service = Arc::new(SubmissionService::new(transport));

    let mut form = OrderForm::new();
    let mut changes = form.subscribe();
    tokio::spawn(async move {
        while let Ok(change) = changes.recv().await {
            tracing::debug!("{:?} updated, order valid: {}", change.field, change.is_valid());
        }
    });

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Cupcake Corner");
    println!("--------------");
    fill_order(&mut form, &mut input).await?;

    while !form.is_valid() {
        println!("Name, street address, city and zip code are all required.");
        fill_shipping(&mut form, &mut input).await?;
    }

    let outcome = service.clone().spawn(form.snapshot()).await?;
    show_notice(&outcome, &mut input).await
}

async fn fill_order(form: &mut OrderForm, input: &mut Input) -> anyhow::Result<()> {
    for (i, name) in FLAVORS.iter().enumerate() {
        println!("  {}) {}", i, name);
    }
    loop {
        let answer = prompt(input, "Select cupcake type").await?;
        let index = answer
            .parse::<i64>()
            .ok()
            .or_else(|| flavor::flavor_index(&answer).and_then(|i| i64::try_from(i).ok()));
        match index.map(|i| form.apply(OrderEdit::Flavor(i))) {
            Some(Ok(())) => break,
            Some(Err(e)) => println!("{}", e),
            None => println!("Pick a number or a flavor name."),
        }
    }

    let label = format!("Number of cupcakes ({}-{})", MIN_QUANTITY, MAX_QUANTITY);
    loop {
        match prompt(input, &label).await?.parse::<i64>() {
            Ok(quantity) => {
                form.apply(OrderEdit::Quantity(quantity))?;
                println!("Number of cupcakes {}", form.order().quantity);
                break;
            }
            Err(_) => println!("Enter a whole number."),
        }
    }

    if confirm(input, "Any special requests?").await? {
        form.apply(OrderEdit::SpecialRequests(true))?;
        let frosting = confirm(input, "Add extra frosting").await?;
        form.apply(OrderEdit::ExtraFrosting(frosting))?;
        let sprinkles = confirm(input, "Add sprinkles").await?;
        form.apply(OrderEdit::AddSprinkles(sprinkles))?;
    }

    fill_shipping(form, input).await
}

async fn fill_shipping(form: &mut OrderForm, input: &mut Input) -> anyhow::Result<()> {
    form.apply(OrderEdit::Name(prompt(input, "Name").await?))?;
    form.apply(OrderEdit::StreetAddress(prompt(input, "Street Address").await?))?;
    form.apply(OrderEdit::City(prompt(input, "City").await?))?;
    form.apply(OrderEdit::Zipcode(prompt(input, "Zip code").await?))?;
    Ok(())
}

async fn show_notice(outcome: &Outcome, input: &mut Input) -> anyhow::Result<()> {
    println!();
    println!("== Order placed ==");
    println!("{}", outcome.message());
    println!("[OK]");
    // Enter or end of input dismisses it.
    input.next_line().await?;
    Ok(())
}

async fn confirm(input: &mut Input, label: &str) -> anyhow::Result<bool> {
    let answer = prompt(input, &format!("{} [y/N]", label)).await?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

async fn prompt(input: &mut Input, label: &str) -> anyhow::Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{}: ", label).as_bytes()).await?;
    stdout.flush().await?;

    let line = input
        .next_line()
        .await?
        .context("Input closed before the order was complete")?;
    Ok(line.trim().to_string())
}
