use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use chrono::{Duration, Utc};
use lagoon_annotate::Annotator;
use lagoon_booking::BookingSession;
use lagoon_core::{compose_reply, ChoiceSource, PovRewriter};
use lagoon_observability::AppMetrics;
use lagoon_storage::BookingRepository;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct BookingExchange {
    pub booking_id: String,
    pub messages: Vec<String>,
    pub complete: bool,
}

/// Front door for one concierge deployment. The rule tables, the rewriter,
/// and the choice source are built once and shared read-only across calls;
/// each `respond` is independent of every other.
#[derive(Clone)]
pub struct BanterAgent<S>
where
    S: BookingRepository,
{
    annotator: Arc<dyn Annotator>,
    pov: Arc<PovRewriter>,
    choice: Arc<dyn ChoiceSource>,
    store: Arc<S>,
    metrics: Arc<AppMetrics>,
}

impl<S> BanterAgent<S>
where
    S: BookingRepository,
{
    pub fn new(
        annotator: Arc<dyn Annotator>,
        choice: Arc<dyn ChoiceSource>,
        store: Arc<S>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            annotator,
            pov: Arc::new(PovRewriter::new()),
            choice,
            store,
            metrics,
        }
    }

    #[instrument(skip(self, utterance))]
    pub fn respond(&self, utterance: &str) -> Result<String> {
        let started = Instant::now();
        self.metrics.inc_request();

        let sentences = self
            .annotator
            .annotate(utterance)
            .context("annotation collaborator failed")?;
        self.metrics.add_sentences(sentences.len());

        let reply = compose_reply(&sentences, &self.pov, self.choice.as_ref());

        self.metrics.observe_latency(started.elapsed());
        info!(
            sentences = sentences.len(),
            reply_len = reply.len(),
            "utterance handled"
        );
        Ok(reply)
    }

    pub async fn begin_booking(&self) -> Result<BookingExchange> {
        self.metrics.inc_booking_started();

        let session = BookingSession::new(Uuid::new_v4().to_string());
        self.store.upsert_booking(&session).await?;

        Ok(BookingExchange {
            booking_id: session.booking_id,
            messages: BookingSession::greeting(),
            complete: false,
        })
    }

    pub async fn booking_reply(&self, booking_id: &str, text: &str) -> Result<BookingExchange> {
        let Some(mut session) = self.store.load_booking(booking_id).await? else {
            bail!("unknown booking id: {booking_id}");
        };

        let messages = session.advance(text);
        if session.is_complete() {
            self.metrics.inc_booking_completed();
        }
        self.store.upsert_booking(&session).await?;

        Ok(BookingExchange {
            booking_id: session.booking_id.clone(),
            messages,
            complete: session.is_complete(),
        })
    }

    pub async fn purge_stale_bookings(&self) -> Result<u64> {
        self.store.purge_stale(Utc::now() - Duration::hours(24)).await
    }
}
