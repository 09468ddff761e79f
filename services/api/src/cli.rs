use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use postforge::error::AppError;
use postforge::quality::generation::DEFAULT_IDEA_COUNT;
use postforge::quality::{Content, ContentPillar, ContentType, Tone, UserProfile};

use crate::demo::{
    run_demo, run_enhance, run_ideas, run_parse, run_validate, run_variations, DemoArgs,
};
use crate::infra::{parse_keyword, parse_tone};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "postforge",
    about = "Score, rank, and enhance generated social posts from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a post and print its quality report
    Validate(PostArgs),
    /// Generate ranked rewrites of a post
    Variations(VariationArgs),
    /// Apply emoji, paragraph, and hashtag enhancements to a post
    Enhance(PostArgs),
    /// Suggest post ideas for a content pillar
    Ideas(IdeaArgs),
    /// Split a drafted post into text, hashtags, and call to action
    Parse(ParseArgs),
    /// Walk a sample post through every pipeline stage
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the random source for reproducible responses
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct PostArgs {
    /// Post body; falls back to --file, then stdin
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Read the post body from a file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Tone the post was written in
    #[arg(long, value_parser = parse_tone, default_value = "professional")]
    pub(crate) tone: Tone,
    /// Hashtags already attached to the post (repeatable)
    #[arg(long = "hashtag")]
    pub(crate) hashtags: Vec<String>,
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Seed the random source for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the raw JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl PostArgs {
    pub(crate) fn content(&self, text: String) -> Content {
        Content {
            hashtags: self.hashtags.clone(),
            tone: self.tone,
            ..Content::from_text(text)
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct VariationArgs {
    #[command(flatten)]
    pub(crate) post: PostArgs,
    /// Number of variations to keep (defaults to APP_VARIATION_COUNT)
    #[arg(long)]
    pub(crate) count: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct IdeaArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Content pillar (leadership, industry_insights, personal_growth)
    #[arg(long, value_parser = parse_keyword::<ContentPillar>, default_value = "leadership")]
    pub(crate) pillar: ContentPillar,
    /// Number of ideas to generate
    #[arg(long, default_value_t = DEFAULT_IDEA_COUNT)]
    pub(crate) count: usize,
    /// Seed the random source for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the raw JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ParseArgs {
    /// Drafted post; falls back to --file, then stdin
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Read the draft from a file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Format the post will be published as
    #[arg(long, value_parser = parse_keyword::<ContentType>, default_value = "text")]
    pub(crate) content_type: ContentType,
    /// Tone the draft was written in
    #[arg(long, value_parser = parse_tone, default_value = "professional")]
    pub(crate) tone: Tone,
    /// Print the raw JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProfileArgs {
    /// Author industry, used for brand alignment and trending hashtags
    #[arg(long, default_value = "")]
    pub(crate) industry: String,
    /// Author role
    #[arg(long, default_value = "")]
    pub(crate) role: String,
    /// Areas of expertise (repeatable)
    #[arg(long)]
    pub(crate) expertise: Vec<String>,
    /// Voice the author's brand is expected to carry
    #[arg(long, value_parser = parse_tone, default_value = "professional")]
    pub(crate) brand_voice: Tone,
    /// Audience the post is written for
    #[arg(long, default_value = "")]
    pub(crate) audience: String,
}

impl ProfileArgs {
    pub(crate) fn profile(&self) -> UserProfile {
        UserProfile {
            industry: self.industry.clone(),
            role: self.role.clone(),
            expertise: self.expertise.clone(),
            brand_voice: self.brand_voice,
            target_audience: self.audience.clone(),
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate(args) => run_validate(args),
        Command::Variations(args) => run_variations(args),
        Command::Enhance(args) => run_enhance(args),
        Command::Ideas(args) => run_ideas(args),
        Command::Parse(args) => run_parse(args),
        Command::Demo(args) => run_demo(args),
    }
}
