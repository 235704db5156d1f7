//! Smoke test: render the landing page to HTML and check its structure.

#[cfg(feature = "ssr")]
#[test]
fn landing_page_renders_every_section() {
    use leptos::prelude::*;
    use sdm_web::config::CONFIG;
    use sdm_web::pages::HomePage;

    let owner = Owner::new();
    owner.set();

    let html = view! { <HomePage /> }.to_html();

    assert!(html.contains("Sui Developer MCP"), "Should render the product name");

    // Section anchors the in-page navigation points at
    for anchor in [
        "id=\"setup\"",
        "id=\"ide-specific-setup-instructions\"",
        "id=\"examples\"",
        "id=\"tools\"",
        "id=\"troubleshooting\"",
    ] {
        assert!(html.contains(anchor), "Missing section anchor: {}", anchor);
    }

    // The settings pane and the copyable snippet inside it
    assert!(html.contains("mcp-settings.json"), "Should render the settings pane");
    assert!(html.contains("mcpServers"), "Setup snippet should be embedded in the page");
    assert!(html.contains("mcp-remote"), "Setup snippet should point at the remote endpoint");

    // One card per configured tool, one block per usage category
    for tool in CONFIG.tools {
        assert!(html.contains(tool.name), "Missing tool card: {}", tool.name);
    }
    for category in CONFIG.usage_examples {
        assert!(
            html.contains(category.category),
            "Missing usage category: {}",
            category.category
        );
    }

    drop(owner);
}
