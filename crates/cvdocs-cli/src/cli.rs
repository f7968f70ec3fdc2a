use clap::{Args, Parser, Subcommand};
use cvdocs_core::catalog::HttpMethod;
use cvdocs_core::explorer::DEFAULT_ENDPOINT;

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "cvdocs - Connected Vehicles API docs in the terminal",
    long_about = "cvdocs shows the Connected Vehicles quick start, a mock API explorer and the API status page. Run it without a subcommand to open the interactive docs."
)]
pub struct Cvdocs {
    #[clap(subcommand)]
    pub commands: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every documentation snippet by section
    Snippets,
    /// Print a documentation snippet
    Snippet {
        #[clap(help = "Snippet slug, e.g. install or webhook-verify (see `cvdocs snippets`)")]
        name: String,

        #[clap(long, short, help = "Language variant to print")]
        lang: Option<String>,
    },
    /// Copy a documentation snippet to the clipboard
    Copy {
        #[clap(help = "Snippet slug, e.g. install or webhook-verify (see `cvdocs snippets`)")]
        name: String,

        #[clap(long, short, help = "Language variant to copy")]
        lang: Option<String>,
    },
    /// List the sandbox endpoints
    Endpoints,
    /// Print the cURL command for a sandbox request
    Curl(RequestArgs),
    /// Send a request to the mock sandbox and print the response
    Request(RequestArgs),
    /// Show the API status page
    Status {
        #[clap(long, help = "Seed for the uptime history")]
        seed: Option<u64>,
    },
    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    #[clap(default_value = DEFAULT_ENDPOINT, help = "Endpoint path, e.g. /v1/vehicles/{id}/lock")]
    pub endpoint: String,

    #[clap(long, short = 'X', default_value = "GET", help = "HTTP method")]
    pub method: HttpMethod,

    #[clap(long, short, help = "Bearer token")]
    pub token: Option<String>,

    #[clap(long, help = "Vehicle id substituted for {id}")]
    pub id: Option<String>,
}
