pub mod artifact;
pub mod client;
pub mod config;
pub mod contract;
pub mod core;
pub mod error;
mod http;
pub mod presenter;
pub mod request;
pub mod selection;
pub mod session;
pub mod youtube;

pub use artifact::Artifact;
pub use client::{Summarizer, SummaryClient};
pub use config::Config;
pub use contract::ContractVersion;
pub use crate::core::{
    Algorithm, DownloadRecord, Percentage, SummaryOutcome, SummaryPayload, SummaryRequest,
    VideoReference,
};
use error::Result;
pub use presenter::RenderInstruction;
pub use selection::Selection;
pub use session::Session;

/// Summarize one video with the given configuration in a fresh session
pub async fn summarize(
    config: &Config,
    url: &str,
    percentage: Percentage,
    algorithm: Algorithm,
) -> Result<(RenderInstruction, Session)> {
    let client = SummaryClient::new(&config.service, config.contract)?;

    let mut session = Session::new(config.ui);
    session.set_url(url);
    session.set_percentage(Selection::percentage_index_of(percentage));
    session.set_algorithm(algorithm.position());

    let render = session.submit(&client).await?;
    Ok((render, session))
}
