//! Trello REST client
//!
//! [`TrelloClient`] is async; [`TrelloSource`] owns a current-thread runtime
//! and drives the client to completion so the rest of the tool stays
//! synchronous.

use serde::de::DeserializeOwned;

use crate::config::TrelloConfig;
use crate::core::models::{BoardList, Card};
use crate::core::ports::{BoardInfo, BoardSource};

use super::types::{BoardSnapshot, TrelloBoard, TrelloCard, TrelloList, open_cards, open_lists};
use super::url::{Credentials, signed_url};
use super::TrelloError;

/// Async client for the board endpoints
#[derive(Debug, Clone)]
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl TrelloClient {
    /// Create a client from config; fails without credentials
    pub fn new(config: &TrelloConfig) -> Result<Self, TrelloError> {
        let credentials = Credentials::from_config(config)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("trello-sprint/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            credentials,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TrelloError> {
        log::debug!("GET {path}");
        let url = signed_url(&self.base_url, path, &self.credentials);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("GET {path} returned {status}");
            return Err(TrelloError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// `GET /boards/{id}`
    pub async fn board(&self, board_id: &str) -> Result<TrelloBoard, TrelloError> {
        self.get_json(&format!("/boards/{board_id}")).await
    }

    /// `GET /boards/{id}/lists`
    pub async fn board_lists(&self, board_id: &str) -> Result<Vec<TrelloList>, TrelloError> {
        self.get_json(&format!("/boards/{board_id}/lists")).await
    }

    /// `GET /boards/{id}/cards`
    pub async fn board_cards(&self, board_id: &str) -> Result<Vec<TrelloCard>, TrelloError> {
        self.get_json(&format!("/boards/{board_id}/cards")).await
    }

    /// Fetch board, lists and cards concurrently
    pub async fn snapshot(&self, board_id: &str) -> Result<BoardSnapshot, TrelloError> {
        let (board, lists, cards) = tokio::try_join!(
            self.board(board_id),
            self.board_lists(board_id),
            self.board_cards(board_id)
        )?;
        log::info!("fetched {} lists and {} cards from {}", lists.len(), cards.len(), board.name);
        Ok(BoardSnapshot { board, lists, cards })
    }
}

/// Blocking board source over the REST API
#[derive(Debug)]
pub struct TrelloSource {
    client: TrelloClient,
    runtime: tokio::runtime::Runtime,
}

impl TrelloSource {
    /// Create a source from config
    pub fn new(config: &TrelloConfig) -> anyhow::Result<Self> {
        let client = TrelloClient::new(config)?;
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        Ok(Self { client, runtime })
    }

    /// Fetch everything the reports need in one go
    pub fn snapshot(&self, board_id: &str) -> anyhow::Result<BoardSnapshot> {
        Ok(self.runtime.block_on(self.client.snapshot(board_id))?)
    }
}

impl BoardSource for TrelloSource {
    fn board(&self, board_id: &str) -> anyhow::Result<BoardInfo> {
        Ok(self.runtime.block_on(self.client.board(board_id))?.into())
    }

    fn lists(&self, board_id: &str) -> anyhow::Result<Vec<BoardList>> {
        let lists = self.runtime.block_on(self.client.board_lists(board_id))?;
        Ok(open_lists(lists))
    }

    fn cards(&self, board_id: &str) -> anyhow::Result<Vec<Card>> {
        let cards = self.runtime.block_on(self.client.board_cards(board_id))?;
        Ok(open_cards(cards))
    }
}
