//! Command line arguments.

use crate::demo::DemoPlan;
use clap::Parser;
use pixela_common::{GraphColor, PixelDate, ValueType};

/// Walks through account, graph and pixel operations against Pixela.
///
/// Credentials come from the `TOKEN` and `USER_NAME` environment variables.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sequence number of the graph to create (id becomes `graph<N>`)
    #[arg(long, default_value_t = 1)]
    pub graph_number: u32,

    /// Display name of the graph
    #[arg(long, default_value = "Spanish Words That I have learnt.")]
    pub name: String,

    /// Unit label of the graph
    #[arg(long, default_value = "Words")]
    pub unit: String,

    /// Quantity type: int or float
    #[arg(long, default_value = "int")]
    pub value_type: ValueType,

    /// Pixel colour: shibafu, momiji, sora, ichou, ajisai, kuro (or green, red, ...)
    #[arg(long, default_value = "shibafu")]
    pub color: GraphColor,

    /// Day to record, as YYYY-MM-DD or YYYYMMDD
    #[arg(long, default_value = "2025-09-20")]
    pub date: PixelDate,

    /// Quantity to record
    #[arg(long, default_value = "10")]
    pub quantity: String,

    /// Quantity to update the pixel to
    #[arg(long, default_value = "20")]
    pub new_quantity: String,

    /// Do not try to create the account first
    #[arg(long)]
    pub skip_account: bool,

    /// Log level filter, overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The demo steps these arguments describe.
    pub fn plan(&self) -> DemoPlan {
        DemoPlan {
            create_account: !self.skip_account,
            graph_number: self.graph_number,
            name: self.name.clone(),
            unit: self.unit.clone(),
            value_type: self.value_type,
            color: self.color,
            date: self.date,
            quantity: self.quantity.clone(),
            new_quantity: self.new_quantity.clone(),
        }
    }
}
