//! Riot API HTTP client implementation

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    CachedProfile, MatchRecord, PlayerIdentity, QueueFilter, RiotConfig, SummonerSnapshot,
};
use crate::domain::ports::MatchSource;

use super::error::RiotApiError;
use super::routing::region_for;
use super::types::SummonerDto;

/// Number of top champion masteries included in a full profile snapshot.
const MASTERY_COUNT: usize = 24;

/// HTTP client for the Riot Games API
///
/// Features:
/// - Connection pooling and reuse (via `reqwest::Client`)
/// - Token bucket rate limiting in front of every request (governor)
/// - Platform/regional host routing for the v4 vs v5 endpoint families
/// - `X-Riot-Token` header authentication
///
/// No retries: a failed request surfaces immediately, and the cache engine
/// above propagates it rather than guessing.
pub struct RiotApiClient {
    http: ReqwestClient,
    api_key: String,
    limiter: DefaultDirectRateLimiter,
    /// Test override; production routes per server/region
    platform_base: Option<String>,
    regional_base: Option<String>,
}

impl RiotApiClient {
    /// Create a client from configuration.
    pub fn new(config: &RiotConfig) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .context("Failed to build HTTP client")?;

        let rps = NonZeroU32::new(config.rate_limit_rps).unwrap_or(NonZeroU32::MIN);

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            limiter: RateLimiter::direct(Quota::per_second(rps)),
            platform_base: None,
            regional_base: None,
        })
    }

    /// Redirect both endpoint families to fixed base URLs (for tests).
    pub fn with_base_urls(
        mut self,
        platform_base: impl Into<String>,
        regional_base: impl Into<String>,
    ) -> Self {
        self.platform_base = Some(platform_base.into());
        self.regional_base = Some(regional_base.into());
        self
    }

    fn platform_url(&self, server: &str) -> String {
        match &self.platform_base {
            Some(base) => base.clone(),
            None => format!("https://{server}.api.riotgames.com"),
        }
    }

    fn regional_url(&self, server: &str) -> String {
        match &self.regional_base {
            Some(base) => base.clone(),
            None => format!("https://{}.api.riotgames.com", region_for(server)),
        }
    }

    /// Rate-limited GET returning the parsed JSON body.
    async fn get_json(&self, url: &str) -> Result<Value, RiotApiError> {
        self.limiter.until_ready().await;
        debug!(url = url, "riot api request");

        let response = self
            .http
            .get(url)
            .header("X-Riot-Token", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RiotApiError::from_status(status));
        }

        Ok(response.json().await?)
    }

    async fn fetch_summoner(
        &self,
        summoner_name: &str,
        server: &str,
    ) -> DomainResult<SummonerDto> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-name/{}",
            self.platform_url(server),
            summoner_name
        );

        let body = self.get_json(&url).await.map_err(|err| match err {
            RiotApiError::NotFound => DomainError::SummonerNotFound {
                summoner: summoner_name.to_string(),
                server: server.to_string(),
            },
            other => upstream(other),
        })?;

        serde_json::from_value(body)
            .map_err(|err| upstream(RiotApiError::UnexpectedPayload(err.to_string())))
    }

    async fn fetch_match_ids(
        &self,
        puuid: &str,
        server: &str,
        count: usize,
        offset: usize,
        filter: QueueFilter,
    ) -> DomainResult<Vec<String>> {
        let mut url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start={}&count={}",
            self.regional_url(server),
            puuid,
            offset,
            count
        );
        if filter != QueueFilter::All {
            url.push_str(&format!("&type={}", filter.as_str()));
        }

        let body = self.get_json(&url).await.map_err(upstream)?;
        serde_json::from_value(body)
            .map_err(|err| upstream(RiotApiError::UnexpectedPayload(err.to_string())))
    }

    async fn fetch_match(&self, match_id: &str, server: &str) -> DomainResult<MatchRecord> {
        let url = format!(
            "{}/lol/match/v5/matches/{}",
            self.regional_url(server),
            match_id
        );

        let body = self.get_json(&url).await.map_err(upstream)?;
        let detail = body.as_object().cloned().unwrap_or_default();
        Ok(MatchRecord::with_detail(match_id, detail))
    }
}

fn upstream(err: RiotApiError) -> DomainError {
    DomainError::UpstreamUnavailable(err.to_string())
}

#[async_trait]
impl MatchSource for RiotApiClient {
    async fn resolve_identity(
        &self,
        summoner_name: &str,
        server: &str,
    ) -> DomainResult<PlayerIdentity> {
        let dto = self.fetch_summoner(summoner_name, server).await?;
        let alias = if dto.name.is_empty() {
            summoner_name.to_string()
        } else {
            dto.name
        };

        Ok(PlayerIdentity {
            puuid: dto.puuid,
            summoner_id: dto.id,
            alias,
            level: dto.summoner_level,
            profile_icon_id: dto.profile_icon_id,
        })
    }

    async fn is_most_recent_match(
        &self,
        server: &str,
        puuid: &str,
        match_id: &str,
    ) -> DomainResult<bool> {
        let ids = self
            .fetch_match_ids(puuid, server, 1, 0, QueueFilter::All)
            .await?;
        Ok(ids.first().is_some_and(|latest| latest.as_str() == match_id))
    }

    async fn fetch_match_batch(
        &self,
        puuid: &str,
        server: &str,
        count: usize,
        offset: usize,
        filter: QueueFilter,
    ) -> DomainResult<Vec<MatchRecord>> {
        let ids = self
            .fetch_match_ids(puuid, server, count, offset, filter)
            .await?;

        // Sequential on purpose: the rate limiter gates each request anyway.
        let mut matches = Vec::with_capacity(ids.len());
        for id in &ids {
            matches.push(self.fetch_match(id, server).await?);
        }
        Ok(matches)
    }

    async fn fetch_full_profile(
        &self,
        summoner_name: &str,
        server: &str,
        count: usize,
        filter: QueueFilter,
    ) -> DomainResult<CachedProfile> {
        let dto = self.fetch_summoner(summoner_name, server).await?;

        let rank = self
            .get_json(&format!(
                "{}/lol/league/v4/entries/by-summoner/{}",
                self.platform_url(server),
                dto.id
            ))
            .await
            .map_err(upstream)?;

        let masteries = self
            .get_json(&format!(
                "{}/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/top?count={}",
                self.platform_url(server),
                dto.puuid,
                MASTERY_COUNT
            ))
            .await
            .map_err(upstream)?;

        let games = self
            .fetch_match_batch(&dto.puuid, server, count, 0, filter)
            .await?;

        let alias = if dto.name.is_empty() {
            summoner_name.to_string()
        } else {
            dto.name
        };

        Ok(CachedProfile::new(
            SummonerSnapshot {
                alias,
                level: dto.summoner_level,
                profile_icon_id: dto.profile_icon_id,
                rank,
                masteries,
            },
            games,
        ))
    }
}
