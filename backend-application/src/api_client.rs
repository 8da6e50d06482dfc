use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use backend_domain::ports::{ApiRequest, GatewayError, HttpMethod, RawResponse, RequestGateway};
use backend_domain::{
    decode_created_id, decode_one, decode_page, Account, ApiEndpoints, ApiKey, DomainError, Event,
    EventSeries, FormBody, StepFailure, TicketType,
};

/// Typed calls against one box office. Every failure comes back tagged
/// with the account this client was built for.
pub struct AccountClient<'a> {
    gateway: &'a dyn RequestGateway,
    endpoints: &'a ApiEndpoints,
    credential: &'a ApiKey,
    account: Account,
}

impl<'a> AccountClient<'a> {
    pub fn new(
        gateway: &'a dyn RequestGateway,
        endpoints: &'a ApiEndpoints,
        credential: &'a ApiKey,
        account: Account,
    ) -> Self {
        Self {
            gateway,
            endpoints,
            credential,
            account,
        }
    }

    pub async fn get_series(&self, series_id: &str) -> Result<EventSeries, StepFailure> {
        let request = ApiRequest::get(self.endpoints.event_series_item(series_id), self.credential);
        self.fetch_one(request).await
    }

    pub async fn list_series(&self, max_pages: u32) -> Result<Vec<EventSeries>, StepFailure> {
        let request = ApiRequest::get(self.endpoints.event_series(), self.credential);
        self.fetch_all(request, max_pages).await
    }

    pub async fn list_events(
        &self,
        series_id: &str,
        max_pages: u32,
    ) -> Result<Vec<Event>, StepFailure> {
        let request = ApiRequest::get(self.endpoints.events(), self.credential)
            .with_query("event_series_id", series_id);
        self.fetch_all(request, max_pages).await
    }

    pub async fn list_ticket_types(
        &self,
        event_id: &str,
        max_pages: u32,
    ) -> Result<Vec<TicketType>, StepFailure> {
        let request = ApiRequest::get(self.endpoints.ticket_types(), self.credential)
            .with_query("event_id", event_id);
        self.fetch_all(request, max_pages).await
    }

    /// Plain GET used for reachability checks; the body is not inspected.
    pub async fn ping(&self, url: String) -> Result<(), StepFailure> {
        self.send(ApiRequest::get(url, self.credential)).await.map(|_| ())
    }

    /// Creates a resource and returns its new id.
    pub async fn create(&self, url: String, body: FormBody) -> Result<String, StepFailure> {
        let request = ApiRequest::post(url, self.credential, body);
        let method = request.method;
        let response = self.send(request).await?;
        decode_created_id(&response.body).map_err(|err| self.decode_failure(method, &response, err))
    }

    async fn fetch_one<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, StepFailure> {
        let method = request.method;
        let response = self.send(request).await?;
        decode_one(&response.body).map_err(|err| self.decode_failure(method, &response, err))
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        first: ApiRequest,
        max_pages: u32,
    ) -> Result<Vec<T>, StepFailure> {
        let mut items = Vec::new();
        let filters = first.query.clone();
        let mut request = first;
        let mut pages = 0u32;
        loop {
            let method = request.method;
            let response = self.send(request).await?;
            let page = decode_page::<T>(&response.body)
                .map_err(|err| self.decode_failure(method, &response, err))?;
            items.extend(page.items);
            pages += 1;

            let Some(next) = page.next else {
                break;
            };
            let next_url = self.endpoints.resolve_link(&next);
            if next_url == response.url {
                warn!("pagination link points back at {}, stopping", next_url);
                break;
            }
            if pages >= max_pages {
                warn!(
                    "stopped after {} pages of {}, more results were available",
                    pages, response.url
                );
                break;
            }
            debug!("following pagination link {}", next_url);
            let mut next_request = ApiRequest::get(next_url, self.credential);
            for (key, value) in &filters {
                if !has_query_key(&next_request.url, key) {
                    next_request = next_request.with_query(key.as_str(), value.as_str());
                }
            }
            request = next_request;
        }
        Ok(items)
    }

    async fn send(&self, request: ApiRequest) -> Result<RawResponse, StepFailure> {
        self.gateway
            .send(request)
            .await
            .map_err(|err| StepFailure::gateway(self.account, err))
    }

    fn decode_failure(
        &self,
        method: HttpMethod,
        response: &RawResponse,
        err: DomainError,
    ) -> StepFailure {
        StepFailure::gateway(
            self.account,
            GatewayError::Decode {
                method,
                url: response.url.clone(),
                description: err.to_string(),
            },
        )
    }
}

/// Whether `url` already carries `key` in its query string.
fn has_query_key(url: &str, key: &str) -> bool {
    url.split_once('?')
        .map(|(_, query)| {
            query
                .split('&')
                .any(|pair| pair.split('=').next() == Some(key))
        })
        .unwrap_or(false)
}
