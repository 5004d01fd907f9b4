//! The sequential walk-through: account, graph, record, update, delete.

use pixela_client::{GraphTrackerClient, PixelaResponse, ResponseReporter};
use pixela_common::{GraphColor, GraphId, PixelDate, PixelaError, Result, Transport, ValueType};
use tracing::{info, warn};

/// What the demo will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoPlan {
    /// Register the account before anything else
    pub create_account: bool,
    /// Graph sequence number
    pub graph_number: u32,
    /// Graph display name
    pub name: String,
    /// Graph unit label
    pub unit: String,
    /// Graph value type
    pub value_type: ValueType,
    /// Graph colour
    pub color: GraphColor,
    /// Day the pixel is recorded on
    pub date: PixelDate,
    /// Initial quantity
    pub quantity: String,
    /// Quantity after the update
    pub new_quantity: String,
}

/// Responses collected along the way.
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Account creation response; `None` when skipped or refused
    pub account: Option<PixelaResponse>,
    /// Id of the graph the pixel lives on
    pub graph_id: GraphId,
    /// Graph creation response; `None` when refused
    pub graph: Option<PixelaResponse>,
    /// Record response
    pub recorded: PixelaResponse,
    /// Update response
    pub updated: PixelaResponse,
    /// Delete response
    pub deleted: PixelaResponse,
    /// Where the graph can be viewed
    pub graph_page_url: String,
}

/// Runs every step in order, stopping at the first error.
///
/// Account or graph creation refused with an HTTP error status (usually
/// because it already exists from an earlier run) is logged and the
/// walk-through carries on with the existing resource.
pub fn run_demo<T, R>(client: &GraphTrackerClient<T, R>, plan: &DemoPlan) -> Result<DemoReport>
where
    T: Transport,
    R: ResponseReporter,
{
    let account = if plan.create_account {
        match client.create_account() {
            Ok(response) => Some(response),
            Err(PixelaError::Status { status, body }) => {
                warn!(
                    status,
                    body = %body,
                    "Account creation refused, continuing with existing account"
                );
                None
            }
            Err(e) => return Err(e),
        }
    } else {
        None
    };

    let created = client.create_graph(
        plan.graph_number,
        &plan.name,
        &plan.unit,
        plan.value_type,
        plan.color,
    );
    let (graph_id, graph) = match created {
        Ok((graph_id, response)) => (graph_id, Some(response)),
        Err(PixelaError::Status { status, body }) => {
            warn!(
                status,
                body = %body,
                "Graph creation refused, continuing with existing graph"
            );
            (GraphId::from_sequence(plan.graph_number)?, None)
        }
        Err(e) => return Err(e),
    };
    info!(graph = %graph_id, "Graph ready");

    let recorded = client.record_pixel_on(graph_id.as_str(), plan.date, &plan.quantity)?;
    let updated = client.update_pixel_on(graph_id.as_str(), plan.date, &plan.new_quantity)?;
    let deleted = client.delete_pixel_on(graph_id.as_str(), plan.date)?;

    let graph_page_url = client.graph_page_url(graph_id.as_str());
    Ok(DemoReport {
        account,
        graph_id,
        graph,
        recorded,
        updated,
        deleted,
        graph_page_url,
    })
}
