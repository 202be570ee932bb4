use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tiny_aggregate::domain::payment::{Amount, Payment, PaymentEvent};
use tiny_aggregate::event_sourcing::{deserialize_event, serialize_event, DomainEvent};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tiny_aggregate=debug"))
        )
        .init();

    tracing::info!("Starting payment aggregate demo");

    // === 1. Record new events ===
    let mut payment = Payment::new();
    payment.take_payment("100.00".parse::<Amount>()?, "USD")?;
    payment.refund("15.50".parse::<Amount>()?)?;

    tracing::info!(
        amount = %payment.amount(),
        refunded = %payment.refunded(),
        uncommitted = payment.to_aggregate().uncommitted_events().len(),
        "Payment taken and partially refunded"
    );

    // === 2. "Persist" them: serialize, then clear the buffer ===
    let mut stored: Vec<String> = Vec::new();
    for event in payment.to_aggregate().uncommitted_events() {
        let json = serialize_event(event)?;
        tracing::info!(event_type = event.event_type(), %json, "Stored event");
        stored.push(json);
    }
    payment.to_aggregate_mut().clear_uncommitted_events();

    // === 3. Rebuild from the stored history ===
    let history = stored
        .iter()
        .map(|json| deserialize_event::<PaymentEvent>(json))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let reloaded = Payment::from_history(history.len() as u64, &history)?;

    tracing::info!(
        loaded_at_version = reloaded.to_aggregate().loaded_at_version(),
        amount = %reloaded.amount(),
        refunded = %reloaded.refunded(),
        status = ?reloaded.status(),
        uncommitted = reloaded.to_aggregate().uncommitted_events().len(),
        "Payment replayed from history"
    );

    tracing::info!("Demo complete");

    Ok(())
}
