//! Static site configuration and page content.
//!
//! Everything the page displays is compile-time data: the copy deck, the
//! link targets, and the `mcp-settings.json` snippet the setup section
//! offers for copying.

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub operator: &'static str,
    pub base_url: &'static str,
    /// Remote MCP endpoint the setup snippet points at.
    pub endpoint: &'static str,
    /// The `mcp-settings.json` snippet, exactly as displayed and copied.
    pub setup_snippet: &'static str,
    pub links: Links,
    pub tools: &'static [Tool],
    pub usage_examples: &'static [UsageCategory],
    pub troubleshooting: &'static [Issue],
}

pub struct Links {
    pub github: &'static str,
    pub sui: &'static str,
}

/// One MCP tool surfaced on the tools showcase.
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

pub struct UsageCategory {
    pub category: &'static str,
    pub examples: &'static [&'static str],
}

pub struct Issue {
    pub symptom: &'static str,
    pub remedy: &'static str,
}

pub static CONFIG: SiteConfig = SiteConfig {
    name: "Sui Developer MCP",
    tagline: "AI-Powered Tools for Sui Developers",
    description: "Access real-time documentation, expert help, and best practices directly in your IDE",
    operator: "MotionEcosystem",
    base_url: "https://sui-developer-mcp.vercel.app",
    endpoint: "https://sui-developer-mcp.vercel.app/mcp",
    setup_snippet: r#"{
  "mcpServers": {
    "sui-developer": {
      "command": "npx",
      "args": ["mcp-remote", "https://sui-developer-mcp.vercel.app/mcp"]
    }
  }
}"#,
    links: Links {
        github: "https://github.com/MotionEcosystem/sui-developer-mcp",
        sui: "https://sui.io",
    },
    tools: &[
        Tool {
            name: "Ask_Sui_Move_Expert",
            description: "Get expert help with Sui Move development, smart contract patterns, and best practices",
            example: "How do I implement a staking mechanism with time-locked rewards?",
        },
        Tool {
            name: "Sui_Documentation_Search",
            description: "Search through Sui's comprehensive documentation with AI context",
            example: "Find information about dynamic fields and object composition",
        },
        Tool {
            name: "Ask_Sui_SDK_Expert",
            description: "TypeScript/Rust SDK assistance with code examples and patterns",
            example: "Show me how to create and sign a programmable transaction",
        },
        Tool {
            name: "Sui_Error_Explainer",
            description: "Decode and solve Sui-specific errors with detailed solutions",
            example: "Explain 'InvalidObjectOwner' error and how to fix it",
        },
        Tool {
            name: "Sui_Best_Practices_Guide",
            description: "Security, performance, and architecture recommendations",
            example: "What are the security best practices for DeFi protocols on Sui?",
        },
    ],
    usage_examples: &[
        UsageCategory {
            category: "Move Development",
            examples: &[
                "How do I create an NFT collection in Sui Move?",
                "Show me how to implement a marketplace smart contract",
                "What's the best way to handle object ownership in my game?",
                "Help me understand capabilities pattern for access control",
            ],
        },
        UsageCategory {
            category: "SDK Integration",
            examples: &[
                "How do I build a transaction with multiple move calls?",
                "Show me TypeScript code to interact with my Move module",
                "Help me set up Sui client in my React app",
                "What's the proper way to handle gas estimation?",
            ],
        },
        UsageCategory {
            category: "Debugging",
            examples: &[
                "Why am I getting 'InsufficientGas' error?",
                "My transaction failed with 'ObjectNotFound' - what went wrong?",
                "Help me debug this Move compilation error",
                "How can I optimize this transaction to use less gas?",
            ],
        },
    ],
    troubleshooting: &[
        Issue {
            symptom: "MCP server not found",
            remedy: "Make sure you've restarted your IDE after adding the config.",
        },
        Issue {
            symptom: "Connection failed",
            remedy: "Check that the URL is correct and accessible.",
        },
        Issue {
            symptom: "No tools available",
            remedy: "Verify the config JSON syntax is valid.",
        },
        Issue {
            symptom: "Permission denied",
            remedy: "Ensure your IDE has internet access.",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_snippet_is_valid_json() {
        let parsed: serde_json::Value =
            serde_json::from_str(CONFIG.setup_snippet).expect("snippet must parse as JSON");
        let server = &parsed["mcpServers"]["sui-developer"];
        assert_eq!(server["command"], "npx");
        assert_eq!(server["args"][0], "mcp-remote");
        assert_eq!(server["args"][1], CONFIG.endpoint);
    }

    #[test]
    fn links_are_absolute() {
        for url in [
            CONFIG.base_url,
            CONFIG.endpoint,
            CONFIG.links.github,
            CONFIG.links.sui,
        ] {
            assert!(url.starts_with("https://"), "not an absolute URL: {}", url);
        }
    }

    #[test]
    fn content_tables_are_populated() {
        assert_eq!(CONFIG.tools.len(), 5);
        for tool in CONFIG.tools {
            assert!(!tool.example.is_empty(), "tool without example: {}", tool.name);
        }

        assert_eq!(CONFIG.usage_examples.len(), 3);
        for category in CONFIG.usage_examples {
            assert!(
                !category.examples.is_empty(),
                "empty usage category: {}",
                category.category
            );
        }

        assert!(!CONFIG.troubleshooting.is_empty());
    }
}
