//! The graph tracker client.
//!
//! Each operation builds one request from its arguments, sends it through the
//! configured [`Transport`] and returns the decoded body. Nothing is cached and
//! nothing is retried.

use crate::models::{
    CreateGraphRequest, CreateUserRequest, PixelaResponse, RecordPixelRequest, UpdatePixelRequest,
};
use crate::reporter::{Operation, ResponseReporter, TracingReporter};
use crate::transport::HttpTransport;
use pixela_common::{
    ApiRequest, GraphColor, GraphId, HttpMethod, PixelDate, PixelaError, Result, Transport,
    ValueType, USER_TOKEN_HEADER,
};
use pixela_config::PixelaConfig;
use tracing::{debug, instrument, warn};

/// Client for one Pixela account.
///
/// Holds an immutable config, a transport and a reporter. All methods take
/// `&self` and block until the service answers.
#[derive(Debug, Clone)]
pub struct GraphTrackerClient<T = HttpTransport, R = TracingReporter> {
    config: PixelaConfig,
    transport: T,
    reporter: R,
}

impl GraphTrackerClient {
    /// Validates `config` and connects through a blocking reqwest transport.
    pub fn new(config: PixelaConfig) -> Result<Self> {
        config.validate_all()?;
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self {
            config,
            transport,
            reporter: TracingReporter,
        })
    }
}

impl<T: Transport> GraphTrackerClient<T> {
    /// Validates `config` and uses `transport` for every request.
    pub fn with_transport(config: PixelaConfig, transport: T) -> Result<Self> {
        config.validate_all()?;
        Ok(Self {
            config,
            transport,
            reporter: TracingReporter,
        })
    }
}

impl<T, R> GraphTrackerClient<T, R> {
    /// Replaces the reporter.
    pub fn with_reporter<R2: ResponseReporter>(self, reporter: R2) -> GraphTrackerClient<T, R2> {
        GraphTrackerClient {
            config: self.config,
            transport: self.transport,
            reporter,
        }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &PixelaConfig {
        &self.config
    }

    /// The transport in use.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// `{base}/{username}/graphs/{graphId}`
    pub fn graph_url(&self, graph_id: &str) -> String {
        format!("{}/{}", self.config.graphs_url(), graph_id)
    }

    /// `{base}/{username}/graphs/{graphId}/{date}`
    pub fn pixel_url(&self, graph_id: &str, date: PixelDate) -> String {
        format!("{}/{}", self.graph_url(graph_id), date.to_wire())
    }

    /// Page where the service renders the graph.
    pub fn graph_page_url(&self, graph_id: &str) -> String {
        format!("{}.html", self.graph_url(graph_id))
    }

    fn authenticated(&self, method: HttpMethod, url: String) -> ApiRequest {
        ApiRequest::new(method, url)
            .header(USER_TOKEN_HEADER, self.config.credentials.token.clone())
    }
}

impl<T: Transport, R: ResponseReporter> GraphTrackerClient<T, R> {
    /// Registers the configured credentials as a new account.
    ///
    /// Sends both consent flags as `"yes"`. No token header is attached; the
    /// token travels in the body instead.
    #[instrument(skip(self), fields(username = %self.config.credentials.username))]
    pub fn create_account(&self) -> Result<PixelaResponse> {
        let credentials = &self.config.credentials;
        let request = ApiRequest::new(HttpMethod::Post, self.config.users_url())
            .json(&CreateUserRequest::new(&credentials.token, &credentials.username))?;
        self.dispatch(Operation::CreateAccount, request)
    }

    /// Defines graph `graph<sequence_number>` and returns its id with the response.
    #[instrument(skip(self, name, unit))]
    pub fn create_graph(
        &self,
        sequence_number: u32,
        name: &str,
        unit: &str,
        value_type: ValueType,
        color: GraphColor,
    ) -> Result<(GraphId, PixelaResponse)> {
        let id = GraphId::from_sequence(sequence_number)?;
        let body = CreateGraphRequest {
            id: &id,
            name,
            unit,
            value_type,
            color,
        };
        let request = self
            .authenticated(HttpMethod::Post, self.config.graphs_url())
            .json(&body)?;
        let response = self.dispatch(Operation::CreateGraph, request)?;
        Ok((id, response))
    }

    /// Records `quantity` for the given day.
    ///
    /// An impossible date fails with `PixelaError::Validation` before any request is sent.
    pub fn record_pixel(
        &self,
        graph_id: impl AsRef<str>,
        year: i32,
        month: u32,
        day: u32,
        quantity: &str,
    ) -> Result<PixelaResponse> {
        let date = PixelDate::from_ymd(year, month, day)?;
        self.record_pixel_on(graph_id.as_ref(), date, quantity)
    }

    /// Records `quantity` for an already validated date.
    #[instrument(skip(self, date), fields(date = %date))]
    pub fn record_pixel_on(
        &self,
        graph_id: &str,
        date: PixelDate,
        quantity: &str,
    ) -> Result<PixelaResponse> {
        let request = self
            .authenticated(HttpMethod::Post, self.graph_url(graph_id))
            .json(&RecordPixelRequest { date, quantity })?;
        self.dispatch(Operation::RecordPixel, request)
    }

    /// Sets the quantity for the given day, creating the pixel if it does not exist.
    ///
    /// Same date precondition as [`record_pixel`](Self::record_pixel).
    pub fn update_pixel(
        &self,
        graph_id: impl AsRef<str>,
        year: i32,
        month: u32,
        day: u32,
        new_quantity: &str,
    ) -> Result<PixelaResponse> {
        let date = PixelDate::from_ymd(year, month, day)?;
        self.update_pixel_on(graph_id.as_ref(), date, new_quantity)
    }

    /// Upserts the pixel for an already validated date.
    #[instrument(skip(self, date), fields(date = %date))]
    pub fn update_pixel_on(
        &self,
        graph_id: &str,
        date: PixelDate,
        new_quantity: &str,
    ) -> Result<PixelaResponse> {
        let request = self
            .authenticated(HttpMethod::Put, self.pixel_url(graph_id, date))
            .json(&UpdatePixelRequest { quantity: new_quantity })?;
        self.dispatch(Operation::UpdatePixel, request)
    }

    /// Removes the pixel for the given day.
    ///
    /// Same date precondition as [`record_pixel`](Self::record_pixel).
    pub fn delete_pixel(
        &self,
        graph_id: impl AsRef<str>,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<PixelaResponse> {
        let date = PixelDate::from_ymd(year, month, day)?;
        self.delete_pixel_on(graph_id.as_ref(), date)
    }

    /// Removes the pixel for an already validated date.
    #[instrument(skip(self, date), fields(date = %date))]
    pub fn delete_pixel_on(&self, graph_id: &str, date: PixelDate) -> Result<PixelaResponse> {
        let request = self.authenticated(HttpMethod::Delete, self.pixel_url(graph_id, date));
        self.dispatch(Operation::DeletePixel, request)
    }

    /// Sends one request. Non-2xx becomes `PixelaError::Status`; a 2xx body is
    /// reported and returned as-is, even when it carries `isSuccess: false`.
    fn dispatch(&self, operation: Operation, request: ApiRequest) -> Result<PixelaResponse> {
        debug!(%operation, method = %request.method, url = %request.url, "Sending request");

        let response = self.transport.execute(request)?;
        if !response.is_success() {
            warn!(%operation, status = response.status, "Pixela returned an error status");
            return Err(PixelaError::status(response.status, response.body));
        }

        let response = PixelaResponse::new(response.body);
        self.reporter.report(operation, &response);
        Ok(response)
    }
}
