use crate::config::CONFIG;
use leptos::prelude::*;

use crate::components::{CopyButton, ExternalLink, Section};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-slate-900 text-white">
            // Hero
            <section class="relative overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-br from-blue-600/20 via-teal-600/20 to-cyan-600/20"></div>
                <div class="relative container mx-auto px-4 py-24 lg:py-32">
                    <div class="max-w-4xl mx-auto text-center">
                        <span class="inline-block mb-6 px-3 py-1 rounded-full text-sm font-medium bg-blue-500/20 text-blue-300 border border-blue-500/30">
                            "AI-Powered Development Assistant"
                        </span>
                        <h1 class="text-5xl lg:text-7xl font-bold mb-6 bg-gradient-to-r from-blue-400 via-teal-400 to-cyan-400 bg-clip-text text-transparent">
                            {CONFIG.name}
                        </h1>
                        <p class="text-xl lg:text-2xl text-slate-300 mb-4 font-medium">{CONFIG.tagline}</p>
                        <p class="text-lg text-slate-400 mb-12 max-w-2xl mx-auto">{CONFIG.description}</p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a
                                href="#setup"
                                class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-md font-medium transition-colors"
                            >
                                "\u{26A1} Quick Setup"
                            </a>
                            <a
                                href="#tools"
                                class="border border-slate-600 text-slate-300 hover:bg-slate-800 px-8 py-3 rounded-md font-medium transition-colors"
                            >
                                "View Tools"
                            </a>
                        </div>
                    </div>

                    // Code editor mockup
                    <div class="mt-16 max-w-4xl mx-auto">
                        <div class="bg-slate-800 rounded-lg border border-slate-700 overflow-hidden shadow-2xl">
                            <div class="flex items-center gap-2 px-4 py-3 bg-slate-700 border-b border-slate-600">
                                <div class="w-3 h-3 rounded-full bg-red-500"></div>
                                <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                                <div class="w-3 h-3 rounded-full bg-green-500"></div>
                                <span class="ml-4 text-sm text-slate-400">"sui-nft-contract.move"</span>
                            </div>
                            <div class="p-6 font-mono text-sm">
                                <div class="text-purple-400">"module"</div>
                                <div class="text-blue-400 ml-4">"nft_collection::collection {"</div>
                                <div class="text-slate-500 ml-8">"// AI-assisted Move development"</div>
                                <div class="text-green-400 ml-8">"use sui::object::{self, UID};"</div>
                                <div class="text-green-400 ml-8">"use sui::transfer;"</div>
                                <div class="text-slate-500 ml-4">"..."</div>
                                <div class="text-blue-400">"}"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Quick setup
            <Section id="setup" title="Quick Setup" subtitle="Get started in minutes with Claude, Cursor, or Windsurf">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <div class="flex items-start gap-4">
                            <div class="w-8 h-8 rounded-full bg-blue-500 flex items-center justify-center text-sm font-bold">
                                "1"
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold mb-2">"Install MCP Server"</h3>
                                <p class="text-slate-400">"Add the Sui Developer MCP server to your IDE configuration"</p>
                            </div>
                        </div>
                        <div class="flex items-start gap-4">
                            <div class="w-8 h-8 rounded-full bg-teal-500 flex items-center justify-center text-sm font-bold">
                                "2"
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold mb-2">"Configure Settings"</h3>
                                <p class="text-slate-400">"Copy the configuration JSON to your MCP settings file"</p>
                            </div>
                        </div>
                        <div class="flex items-start gap-4">
                            <div class="w-8 h-8 rounded-full bg-cyan-500 flex items-center justify-center text-sm font-bold">
                                "3"
                            </div>
                            <div>
                                <h3 class="text-lg font-semibold mb-2">"Start Developing"</h3>
                                <p class="text-slate-400">"Begin asking questions and getting AI-powered assistance"</p>
                            </div>
                        </div>
                    </div>

                    <div class="bg-slate-800 rounded-lg border border-slate-700 overflow-hidden">
                        <div class="flex items-center justify-between px-4 py-3 bg-slate-700 border-b border-slate-600">
                            <span class="text-sm text-slate-400">"mcp-settings.json"</span>
                            <CopyButton text=CONFIG.setup_snippet.to_string() label="Copy".to_string() />
                        </div>
                        <pre class="p-4 text-sm font-mono text-slate-300 overflow-x-auto">{CONFIG.setup_snippet}</pre>
                    </div>
                </div>
            </Section>

            // IDE-specific setup instructions
            <Section
                id="ide-specific-setup-instructions"
                title="IDE Setup Instructions"
                subtitle="Follow these steps to integrate Sui Developer MCP with your favorite IDE"
                tinted=true
            >
                <div class="space-y-8">
                    <div class="bg-slate-800 border border-slate-700 rounded-lg p-6">
                        <h3 class="text-xl font-semibold mb-4">"Claude Desktop Setup"</h3>
                        <div class="text-slate-400">
                            <p class="mb-2">"Location of config file:"</p>
                            <ul class="list-disc list-inside mb-4">
                                <li>"Mac: ~/Library/Application Support/Claude/claude_desktop_config.json"</li>
                                <li>"Windows: %APPDATA%\\Claude\\claude_desktop_config.json"</li>
                                <li>"Linux: ~/.config/Claude/claude_desktop_config.json"</li>
                            </ul>
                            <p class="mb-2">"Steps:"</p>
                            <ol class="list-decimal list-inside space-y-1">
                                <li>"Open the config file (create if it doesn't exist)"</li>
                                <li>"Add the MCP server configuration"</li>
                                <li>"Restart Claude Desktop"</li>
                                <li>"Test by asking: \"What Sui development tools do you have available?\""</li>
                            </ol>
                        </div>
                    </div>

                    <div class="bg-slate-800 border border-slate-700 rounded-lg p-6">
                        <h3 class="text-xl font-semibold mb-4">"Windsurf Setup"</h3>
                        <div class="text-slate-400">
                            <p class="mb-2">"Steps:"</p>
                            <ol class="list-decimal list-inside space-y-1">
                                <li>"Open Windsurf"</li>
                                <li>"Press Cmd/Ctrl + Shift + P to open command palette"</li>
                                <li>"Type \"MCP: Configure Servers\""</li>
                                <li>"Add the server configuration"</li>
                                <li>"Restart Windsurf"</li>
                                <li>"Test in a new chat"</li>
                            </ol>
                        </div>
                    </div>

                    <div class="bg-slate-800 border border-slate-700 rounded-lg p-6">
                        <h3 class="text-xl font-semibold mb-4">"Cursor Setup"</h3>
                        <div class="text-slate-400">
                            <p class="mb-2">"Steps:"</p>
                            <ol class="list-decimal list-inside space-y-1">
                                <li>"Open Cursor Settings (Cmd/Ctrl + ,)"</li>
                                <li>"Go to \"Features\" \u{2192} \"Model Context Protocol\""</li>
                                <li>"Click \"Add MCP Server\""</li>
                                <li>"Paste the configuration"</li>
                                <li>"Enable the server"</li>
                                <li>"Test in Cursor Chat"</li>
                            </ol>
                        </div>
                    </div>
                </div>
            </Section>

            // Usage examples
            <Section id="examples" title="Ask Anything About Sui" subtitle="Get instant help with common development questions">
                <div class="space-y-8">
                    {CONFIG.usage_examples.iter().map(|category| view! {
                        <div>
                            <h3 class="text-2xl font-bold mb-4 text-teal-400">{category.category}</h3>
                            <div class="space-y-4">
                                {category.examples.iter().map(|example| view! {
                                    <div class="flex items-start gap-4 p-4 bg-slate-800 rounded-lg border border-slate-700">
                                        <span class="text-blue-400 mt-1">"\u{203A}"</span>
                                        <p class="text-slate-300">{*example}</p>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </Section>

            // Tools showcase
            <Section
                id="tools"
                title="Available Tools"
                subtitle="Specialized tools for every aspect of Sui development"
                tinted=true
            >
                <div class="grid md:grid-cols-2 gap-8">
                    {CONFIG.tools.iter().map(|tool| view! {
                        <div class="bg-slate-800 border border-slate-700 rounded-lg p-6 hover:border-teal-500/50 transition-colors">
                            <h3 class="text-white font-semibold flex items-center gap-2 mb-2">
                                <span class="text-teal-400">"</>"</span>
                                {tool.name}
                            </h3>
                            <p class="text-slate-400 mb-4">{tool.description}</p>
                            <div class="bg-slate-900 rounded p-3 border border-slate-600">
                                <p class="text-sm text-slate-300 font-mono">"Example: " {tool.example}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </Section>

            // Troubleshooting
            <Section id="troubleshooting" title="Troubleshooting" subtitle="Having issues? Check these common solutions.">
                <div class="space-y-4">
                    {CONFIG.troubleshooting.iter().map(|issue| view! {
                        <div class="bg-slate-800 border border-slate-700 rounded-lg p-6">
                            <h3 class="font-semibold mb-2">"\u{201C}" {issue.symptom} "\u{201D}"</h3>
                            <p class="text-slate-400">{issue.remedy}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Section>

            // Footer
            <footer class="py-16 bg-slate-900 border-t border-slate-800">
                <div class="container mx-auto px-4">
                    <div class="max-w-4xl mx-auto flex flex-col md:flex-row justify-between items-center gap-8">
                        <div class="text-center md:text-left">
                            <h3 class="text-2xl font-bold mb-2 bg-gradient-to-r from-blue-400 to-teal-400 bg-clip-text text-transparent">
                                {CONFIG.name}
                            </h3>
                            <p class="text-slate-400">"Built by " {CONFIG.operator}</p>
                        </div>
                        <div class="flex flex-wrap gap-2 justify-center">
                            <ExternalLink href=CONFIG.links.github.to_string() label="GitHub".to_string() />
                            <a
                                href="#ide-specific-setup-instructions"
                                class="inline-flex items-center gap-2 px-4 py-2 rounded-md text-slate-400 hover:text-white hover:bg-slate-800 transition-colors"
                            >
                                "Documentation"
                            </a>
                            <ExternalLink href=CONFIG.links.sui.to_string() label="Sui Network".to_string() />
                        </div>
                    </div>
                    <div class="mt-8 pt-8 border-t border-slate-800 text-center text-slate-500">
                        <p>"\u{00A9} 2024 " {CONFIG.operator} ". All rights reserved."</p>
                    </div>
                </div>
            </footer>
        </main>
    }
}
