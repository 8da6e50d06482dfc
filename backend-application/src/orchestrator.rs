use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use backend_domain::ports::RequestGateway;
use backend_domain::{
    clamp_order_limits, classify_failure, format_payload, scoped_id, Account, ApiKey,
    CopyOutcome, CopyReport, CopySettings, EntityKind, Event, EventCreateRoute,
    IdentifierMap, StepFailure, TicketType, TicketTypeParent, TicketTypeSource,
};

use crate::api_client::AccountClient;

/// Source parent keys that would point the copy back at the source account.
const STALE_PARENT_KEYS: [&str; 2] = ["event_id", "event_series_id"];

/// Copies one event series, with its events and their ticket types, from the
/// source box office to the target box office.
///
/// Runs strictly in order and stops at the first failure. Whatever was created
/// on the target before that point stays there. Running it twice creates two
/// independent copies.
pub struct CopyOrchestrator {
    gateway: Arc<dyn RequestGateway>,
    settings: CopySettings,
}

/// Mutable bookkeeping of a single run.
struct CopyRun<'a> {
    source: AccountClient<'a>,
    target: AccountClient<'a>,
    settings: &'a CopySettings,
    ids: IdentifierMap,
}

impl CopyOrchestrator {
    pub fn new(gateway: Arc<dyn RequestGateway>, settings: CopySettings) -> Self {
        Self { gateway, settings }
    }

    pub async fn copy_series(
        &self,
        source_key: &ApiKey,
        target_key: &ApiKey,
        series_id: &str,
    ) -> CopyOutcome {
        let run_id = Uuid::new_v4();
        let span = info_span!("copy_series", %run_id, series_id);
        async {
            let endpoints = &self.settings.endpoints;
            let mut run = CopyRun {
                source: AccountClient::new(
                    self.gateway.as_ref(),
                    endpoints,
                    source_key,
                    Account::Source,
                ),
                target: AccountClient::new(
                    self.gateway.as_ref(),
                    endpoints,
                    target_key,
                    Account::Target,
                ),
                settings: &self.settings,
                ids: IdentifierMap::new(),
            };
            match run.execute(series_id).await {
                Ok(report) => {
                    info!(
                        "copied series {} as {} ({} events, {} ticket types)",
                        series_id,
                        report.new_series_id,
                        report.events_created,
                        report.ticket_types_created
                    );
                    CopyOutcome::Success(report)
                }
                Err(failure) => {
                    let failure = classify_failure(&failure);
                    warn!(
                        "copy of series {} stopped after {} events: {}",
                        series_id,
                        run.ids.count(EntityKind::Event),
                        failure.message
                    );
                    CopyOutcome::Failure(failure)
                }
            }
        }
        .instrument(span)
        .await
    }
}

impl<'a> CopyRun<'a> {
    async fn execute(&mut self, series_id: &str) -> Result<CopyReport, StepFailure> {
        let series = self.source.get_series(series_id).await?;
        info!("api success (GET, source): retrieved event series {}", series.id);

        let body = format_payload("event series", &series.to_record())
            .map_err(|err| StepFailure::domain(Account::Source, err))?;
        let new_series_id = self
            .target
            .create(self.settings.endpoints.event_series(), body)
            .await?;
        self.ids.record(EntityKind::Series, &series.id, &new_series_id);
        info!("api success (POST, target): created event series {}", new_series_id);

        let events = self
            .source
            .list_events(&series.id, self.settings.max_pages)
            .await?;
        info!(
            "api success (GET, source): retrieved {} events for series {}",
            events.len(),
            series.id
        );

        for event in &events {
            if let Some(parent) = event.series_id() {
                if parent != series.id {
                    warn!(
                        "skipping event {} of series {} listed under series {}",
                        event.id, parent, series.id
                    );
                    continue;
                }
            }
            if !self.copy_event(event, &series.id).await? {
                continue;
            }
            let ticket_types = self.source_ticket_types(event).await?;
            for ticket_type in &ticket_types {
                self.copy_ticket_type(ticket_type, &series.id, &event.id)
                    .await?;
            }
        }

        Ok(CopyReport {
            new_series_id,
            events_created: self.ids.count(EntityKind::Event),
            ticket_types_created: self.ids.count(EntityKind::TicketType),
        })
    }

    fn target_parent(&self, kind: EntityKind, source_id: &str) -> Result<String, StepFailure> {
        self.ids
            .resolve(kind, source_id)
            .map(str::to_string)
            .map_err(|err| StepFailure::domain(Account::Target, err))
    }

    /// Returns false when the event was already copied earlier in this run.
    async fn copy_event(&mut self, event: &Event, source_series_id: &str) -> Result<bool, StepFailure> {
        if let Some(existing) = self.ids.target_of(EntityKind::Event, &event.id) {
            warn!("event {} listed again, already copied as {}", event.id, existing);
            return Ok(false);
        }
        let new_series_id = self.target_parent(EntityKind::Series, source_series_id)?;
        let mut body = format_payload("event", &event.to_record())
            .map_err(|err| StepFailure::domain(Account::Source, err))?;
        let endpoints = &self.settings.endpoints;
        let url = match self.settings.event_create_route {
            EventCreateRoute::SeriesScoped => endpoints.series_events(&new_series_id),
            EventCreateRoute::TopLevel => {
                body.set("event_series_id", new_series_id.as_str());
                endpoints.events()
            }
        };

        let new_event_id = self.target.create(url, body).await?;
        self.ids.record(EntityKind::Event, &event.id, &new_event_id);
        info!(
            "api success (POST, target): created event {} in series {}",
            new_event_id, new_series_id
        );
        Ok(true)
    }

    async fn source_ticket_types(&self, event: &Event) -> Result<Vec<TicketType>, StepFailure> {
        match self.settings.ticket_type_source {
            TicketTypeSource::Embedded => Ok(event.ticket_types.clone().unwrap_or_default()),
            TicketTypeSource::ByEvent => {
                let ticket_types = self
                    .source
                    .list_ticket_types(&event.id, self.settings.max_pages)
                    .await?;
                info!(
                    "api success (GET, source): retrieved {} ticket types for event {}",
                    ticket_types.len(),
                    event.id
                );
                Ok(ticket_types)
            }
        }
    }

    async fn copy_ticket_type(
        &mut self,
        ticket_type: &TicketType,
        source_series_id: &str,
        source_event_id: &str,
    ) -> Result<(), StepFailure> {
        let mut record = ticket_type.to_record();
        for key in STALE_PARENT_KEYS {
            record.remove(key);
        }
        debug!("ticket type {} before validation: {:?}", ticket_type.id, record);
        let record = clamp_order_limits(record);
        debug!("ticket type {} after validation: {:?}", ticket_type.id, record);

        let mut body = format_payload("ticket type", &record)
            .map_err(|err| StepFailure::domain(Account::Source, err))?;
        let endpoints = &self.settings.endpoints;
        let (url, parent) = match self.settings.ticket_type_parent {
            TicketTypeParent::Series => {
                let new_series_id = self.target_parent(EntityKind::Series, source_series_id)?;
                (endpoints.series_ticket_types(&new_series_id), new_series_id)
            }
            TicketTypeParent::Event => {
                let new_event_id = self.target_parent(EntityKind::Event, source_event_id)?;
                body.set("event_id", new_event_id.as_str());
                (endpoints.ticket_types(), new_event_id)
            }
        };

        let new_ticket_type_id = self.target.create(url, body).await?;
        self.ids.record(
            EntityKind::TicketType,
            &scoped_id(source_event_id, &ticket_type.id),
            &new_ticket_type_id,
        );
        info!(
            "api success (POST, target): created ticket type {} under {}",
            new_ticket_type_id, parent
        );
        Ok(())
    }
}
