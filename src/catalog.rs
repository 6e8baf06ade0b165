//! Static agent and quick-action records shown in the UI.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub prompt: &'static str,
}

pub const AGENTS: &[AgentDescriptor] = &[
    AgentDescriptor {
        id: "post_generation_agent",
        name: "Post Generator",
        description: "Generate posts for LinkedIn and X with Gemini and Google web search",
        icon: "fas fa-search",
        gradient: "linear-gradient(135deg, #3b82f6, #8b5cf6)",
    },
    AgentDescriptor {
        id: "stack_analysis_agent",
        name: "Stack Analyst",
        description: "Analyze the stack of a Project and generate insights from it",
        icon: "fas fa-file-text",
        gradient: "linear-gradient(135deg, #10b981, #059669)",
    },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Recent Research",
        icon: "fas fa-search",
        color: "#3b82f6",
        prompt: "Generate a post about recent research on String Theory",
    },
    QuickAction {
        label: "Recent News",
        icon: "fas fa-newspaper",
        color: "#10b981",
        prompt: "Generate a post about recent news in United States",
    },
    QuickAction {
        label: "Post about Social Media",
        icon: "fab fa-twitter",
        color: "#8b5cf6",
        prompt: "Generate a post about Instagram",
    },
    QuickAction {
        label: "Post about Stocks",
        icon: "fas fa-chart-line",
        color: "#f59e0b",
        prompt: "Generate a post about Nvidia",
    },
];

/// The agent selected when the app starts.
pub fn default_agent() -> &'static AgentDescriptor {
    &AGENTS[0]
}

/// Look up an agent by id, falling back to the default agent.
pub fn agent_or_default(id: &str) -> &'static AgentDescriptor {
    AGENTS
        .iter()
        .find(|agent| agent.id == id)
        .unwrap_or_else(default_agent)
}
