//! The provisioning client and the invite/remove orchestration.

use crate::compose;
use crate::config::{LlmSettings, ProvisionConfig, TtsSettings};
use crate::error::ProvisionError;
use crate::tts;
use chorus_token::{ChannelRole, CredentialIssuer, DEFAULT_TOKEN_TTL_SECS};
use chorus_types::{AgentResponse, InviteAgentRequest};
use std::time::Duration;

/// Total timeout for one call to the provisioning service. The upstream
/// contract defines none; unbounded blocking is worse than a failed invite.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Stateless orchestrator for starting and stopping agents.
///
/// Holds an immutable configuration snapshot and a shared HTTP client.
/// Every invite issues a fresh agent credential and composes a fresh
/// provisioning request; nothing is retried, cached, or persisted, and a
/// single upstream failure is a single client-visible failure.
#[derive(Debug, Clone)]
pub struct ProvisionService {
    app_id: String,
    config: ProvisionConfig,
    llm: LlmSettings,
    tts: TtsSettings,
    issuer: CredentialIssuer,
    http: reqwest::Client,
}

impl ProvisionService {
    pub fn new(
        app_id: impl Into<String>,
        config: ProvisionConfig,
        llm: LlmSettings,
        tts: TtsSettings,
        issuer: CredentialIssuer,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            app_id: app_id.into(),
            config,
            llm,
            tts,
            issuer,
            http,
        }
    }

    /// Provisions an agent into the requested channel.
    ///
    /// Issues the agent's own publisher credential, resolves the configured
    /// TTS vendor, composes the upstream body, and forwards it. A non-success
    /// upstream status is surfaced with its status and body; the successful
    /// response is returned unchanged.
    pub async fn invite(&self, req: &InviteAgentRequest) -> Result<AgentResponse, ProvisionError> {
        let name = compose::new_session_name();
        let credential = self.issuer.issue(
            &req.channel_name,
            &self.config.agent_uid,
            ChannelRole::Publisher,
            DEFAULT_TOKEN_TTL_SECS,
        )?;
        let tts = tts::resolve(&self.tts)?;
        let body = compose::compose(name, req, &credential, tts, &self.llm);

        tracing::info!(
            channel = %req.channel_name,
            session = %body.name,
            string_uid = body.properties.enable_string_uid,
            "provisioning agent"
        );

        let response = self
            .http
            .post(self.join_url())
            .basic_auth(&self.config.customer_id, Some(&self.config.customer_secret))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let upstream_body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %upstream_body,
                "provisioning join failed"
            );
            return Err(ProvisionError::Upstream {
                status: status.as_u16(),
                body: upstream_body,
            });
        }

        let agent: AgentResponse = response.json().await?;
        tracing::info!(agent_id = %agent.agent_id, state = %agent.state, "agent provisioned");
        Ok(agent)
    }

    /// Asks the provisioning service to remove a previously started agent.
    ///
    /// No local state is consulted; the upstream decides whether the agent
    /// exists.
    pub async fn remove(&self, agent_id: &str) -> Result<(), ProvisionError> {
        tracing::info!(agent_id = %agent_id, "removing agent");

        let response = self
            .http
            .post(self.leave_url(agent_id))
            .basic_auth(&self.config.customer_id, Some(&self.config.customer_secret))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let upstream_body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %upstream_body,
                "provisioning leave failed"
            );
            return Err(ProvisionError::Upstream {
                status: status.as_u16(),
                body: upstream_body,
            });
        }

        Ok(())
    }

    fn join_url(&self) -> String {
        format!(
            "{}/{}/join",
            self.config.base_url.trim_end_matches('/'),
            self.app_id
        )
    }

    fn leave_url(&self, agent_id: &str) -> String {
        format!(
            "{}/{}/agents/{}/leave",
            self.config.base_url.trim_end_matches('/'),
            self.app_id,
            agent_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ProvisionService {
        let config = ProvisionConfig {
            base_url: "https://api.example.com/v1/projects/".to_string(),
            customer_id: "cust".to_string(),
            customer_secret: "s3cr3t-value".to_string(),
            agent_uid: "Agent".to_string(),
        };
        ProvisionService::new(
            "app-1",
            config,
            LlmSettings::default(),
            TtsSettings::default(),
            CredentialIssuer::new("app-1", "cert"),
        )
    }

    #[test]
    fn join_url_embeds_app_id_and_strips_trailing_slash() {
        assert_eq!(
            service().join_url(),
            "https://api.example.com/v1/projects/app-1/join"
        );
    }

    #[test]
    fn leave_url_embeds_agent_id() {
        assert_eq!(
            service().leave_url("agt-9"),
            "https://api.example.com/v1/projects/app-1/agents/agt-9/leave"
        );
    }

    #[test]
    fn debug_output_redacts_customer_secret() {
        let rendered = format!("{:?}", service());
        assert!(!rendered.contains("s3cr3t-value"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
