//! Agent registry and definitions.
//!
//! Defines which CLI agents can be validated, how to probe them, and where
//! to send users who don't have them installed. The registry is built once
//! at startup and never mutated; iteration order is the declaration order
//! below, which also fixes report and output order.

use indexmap::IndexMap;

/// Static description of one checkable CLI agent.
#[derive(Debug, Clone)]
pub struct AgentSpec {
    /// Agent key (e.g., "claude", "codex").
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Ordered candidate invocations. The first is the bare binary name,
    /// used for the existence check and the smoke test.
    pub commands: Vec<String>,
    /// Command whose exit code reports authentication state. Agents without
    /// one get `unknown` auth status, which is a valid state.
    pub auth_check: Option<String>,
    /// Where to install the agent from.
    pub install_url: String,
}

/// Registry of all known agents, in fixed declaration order.
pub struct AgentRegistry {
    agents: IndexMap<String, AgentSpec>,
}

impl AgentRegistry {
    /// Create a registry with the built-in agents.
    pub fn new() -> Self {
        let mut agents = IndexMap::new();

        insert(
            &mut agents,
            AgentSpec {
                name: "claude".to_string(),
                description: "Anthropic Claude Code CLI".to_string(),
                commands: vec!["claude".to_string(), "claude -p 'test'".to_string()],
                auth_check: Some("claude auth status".to_string()),
                install_url: "https://claude.ai/install".to_string(),
            },
        );

        insert(
            &mut agents,
            AgentSpec {
                name: "codex".to_string(),
                description: "OpenAI Codex CLI".to_string(),
                commands: vec!["codex".to_string(), "codex exec 'test'".to_string()],
                auth_check: Some("codex auth verify".to_string()),
                install_url: "https://platform.openai.com/docs/cli".to_string(),
            },
        );

        insert(
            &mut agents,
            AgentSpec {
                name: "gemini".to_string(),
                description: "Google Gemini CLI".to_string(),
                commands: vec!["gemini".to_string(), "gemini -p 'test'".to_string()],
                auth_check: Some("gemini auth status".to_string()),
                install_url: "https://geminicli.com/docs/installation".to_string(),
            },
        );

        insert(
            &mut agents,
            AgentSpec {
                name: "opencode".to_string(),
                description: "OpenCode CLI (multi-provider)".to_string(),
                commands: vec!["opencode".to_string(), "opencode -p 'test'".to_string()],
                // OpenCode authenticates through provider API keys; there is
                // no auth subcommand to probe.
                auth_check: None,
                install_url: "https://github.com/opencode-ai/opencode".to_string(),
            },
        );

        insert(
            &mut agents,
            AgentSpec {
                name: "qwen".to_string(),
                description: "Alibaba Qwen Code CLI".to_string(),
                commands: vec!["qwen".to_string(), "qwen -p 'test'".to_string()],
                auth_check: Some("qwen auth status".to_string()),
                install_url: "https://github.com/QwenLM/qwen-code".to_string(),
            },
        );

        insert(
            &mut agents,
            AgentSpec {
                name: "droid".to_string(),
                description: "Factory Droid CLI".to_string(),
                commands: vec!["droid".to_string(), "droid exec 'test'".to_string()],
                auth_check: Some("droid auth status".to_string()),
                install_url: "https://docs.factory.ai/cli/installation".to_string(),
            },
        );

        Self { agents }
    }

    /// Look up an agent by name.
    pub fn get(&self, name: &str) -> Option<&AgentSpec> {
        self.agents.get(name)
    }

    /// All known agent names, in registry order.
    pub fn known_names(&self) -> Vec<&str> {
        self.agents.keys().map(|s| s.as_str()).collect()
    }

    /// Iterate over all agent specs, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentSpec> {
        self.agents.values()
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn insert(agents: &mut IndexMap<String, AgentSpec>, spec: AgentSpec) {
    agents.insert(spec.name.clone(), spec);
}
