//! Command-line interface for catalogue generation, search, and rendering

use crate::catalogue::coordination::CoordinateIndex;
use crate::catalogue::dataset::Dataset;
use crate::catalogue::generator::{self, GeneratorConfig};
use crate::catalogue::owners::{self, OwnerSortKey, SortDirection};
use crate::catalogue::plot::Plot;
use crate::io::configuration::{
    DEFAULT_PAGE_SIZE, DEFAULT_RASTER_SCALE, DEFAULT_SEED, DEFAULT_SOLD_PLOTS,
    DEFAULT_TOTAL_PLOTS,
};
use crate::io::error::{CatalogueError, Result, invalid_parameter};
use crate::io::progress::RenderProgress;
use crate::pattern::rule::PatternRule;
use crate::pattern::search::{self, SearchQuery, SortOrder, StatusFilter};
use crate::synthesis::matrix::ColorMatrix;
use crate::synthesis::raster::export_matrix_png;
use crate::synthesis::svg;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plotfinder")]
#[command(author, version, about = "Search and render a land plot catalogue")]
/// Command-line arguments for the catalogue tool
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Generate a mock plot dataset
    Generate {
        /// Output JSON file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Total number of plots
        #[arg(long, default_value_t = DEFAULT_TOTAL_PLOTS)]
        total: usize,

        /// Sold-plot target
        #[arg(long, default_value_t = DEFAULT_SOLD_PLOTS)]
        sold: usize,

        /// Random seed for reproducible generation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Filter, sort, and page through a dataset
    Search {
        /// Dataset JSON file
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Pattern rule applied to plot ids
        #[arg(short, long, value_enum, default_value_t = RuleArg::All)]
        rule: RuleArg,

        /// Wildcard pattern for the custom rule (* stands for any single digit)
        #[arg(short, long)]
        wildcard: Option<String>,

        /// Sold-status narrowing
        #[arg(long, value_enum, default_value_t = StatusArg::Any)]
        status: StatusArg,

        /// Result ordering
        #[arg(long, value_enum, default_value_t = OrderArg::IdAsc)]
        order: OrderArg,

        /// 1-based result page
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Plots per result page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Emit the page as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report owner concentration across a dataset
    Owners {
        /// Dataset JSON file
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Keep only addresses containing this term
        #[arg(long)]
        address: Option<String>,

        /// Report ordering key
        #[arg(long, value_enum, default_value_t = OwnerSortArg::Plots)]
        sort: OwnerSortArg,

        /// Sort smallest holders first
        #[arg(long)]
        ascending: bool,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print catalogue summary statistics
    Stats {
        /// Dataset JSON file
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Emit the statistics as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one plot with its synthesized image resource
    Show {
        /// Dataset JSON file
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Plot id to display
        id: u64,

        /// Coordination file with hosted imagery and bounds
        #[arg(long)]
        coordination: Option<PathBuf>,
    },

    /// Render plot images to files
    Render {
        /// Output directory
        #[arg(short, long, default_value = "plots")]
        out_dir: PathBuf,

        /// Explicit plot ids to render (repeatable)
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<u64>,

        /// Dataset to render from when no explicit ids are given
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Pattern rule applied to dataset ids
        #[arg(short, long, value_enum, default_value_t = RuleArg::All)]
        rule: RuleArg,

        /// Wildcard pattern for the custom rule
        #[arg(short, long)]
        wildcard: Option<String>,

        /// Output image format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Svg)]
        format: FormatArg,

        /// Pixel scale for PNG output
        #[arg(long, default_value_t = DEFAULT_RASTER_SCALE)]
        scale: u32,
    },
}

/// Pattern rule selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    /// Every id matches
    All,
    /// Digit string equals its own reversal
    Palindrome,
    /// Every digit is identical
    Repeating,
    /// At least two trailing zeros
    Round,
    /// First half equals the reversed second half
    Mirror,
    /// First half equals the second half literally
    Combination,
    /// Wildcard pattern supplied via --wildcard
    Custom,
}

impl RuleArg {
    /// Combine the rule tag with the optional wildcard pattern
    ///
    /// A missing wildcard leaves the custom rule matching nothing.
    fn into_rule(self, wildcard: Option<String>) -> PatternRule {
        match self {
            Self::All => PatternRule::All,
            Self::Palindrome => PatternRule::Palindrome,
            Self::Repeating => PatternRule::Repeating,
            Self::Round => PatternRule::Round,
            Self::Mirror => PatternRule::Mirror,
            Self::Combination => PatternRule::Combination,
            Self::Custom => PatternRule::Custom(wildcard.unwrap_or_default()),
        }
    }
}

/// Sold-status selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Keep every plot
    Any,
    /// Keep unsold plots only
    Available,
    /// Keep sold plots only
    Sold,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Any => Self::Any,
            StatusArg::Available => Self::Available,
            StatusArg::Sold => Self::Sold,
        }
    }
}

/// Result ordering selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Ascending plot id
    IdAsc,
    /// Descending plot id
    IdDesc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::IdAsc => Self::IdAscending,
            OrderArg::IdDesc => Self::IdDescending,
        }
    }
}

/// Owners report ordering selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OwnerSortArg {
    /// Order by number of plots held
    Plots,
    /// Order by catalogue share
    Percentage,
}

impl From<OwnerSortArg> for OwnerSortKey {
    fn from(arg: OwnerSortArg) -> Self {
        match arg {
            OwnerSortArg::Plots => Self::PlotsOwned,
            OwnerSortArg::Percentage => Self::Percentage,
        }
    }
}

/// Render output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Plain SVG documents
    Svg,
    /// PNG rasters at the configured scale
    Png,
}

/// Orchestrates command execution
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded, a parameter is
    /// invalid, or an output cannot be written
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Generate {
                output,
                total,
                sold,
                seed,
            } => Self::run_generate(output, *total, *sold, *seed),
            Command::Search {
                dataset,
                rule,
                wildcard,
                status,
                order,
                page,
                page_size,
                json,
            } => Self::run_search(
                dataset,
                rule.into_rule(wildcard.clone()),
                (*status).into(),
                (*order).into(),
                *page,
                *page_size,
                *json,
            ),
            Command::Owners {
                dataset,
                address,
                sort,
                ascending,
                json,
            } => Self::run_owners(dataset, address.as_deref(), (*sort).into(), *ascending, *json),
            Command::Stats { dataset, json } => Self::run_stats(dataset, *json),
            Command::Show {
                dataset,
                id,
                coordination,
            } => Self::run_show(dataset, *id, coordination.as_deref()),
            Command::Render {
                out_dir,
                ids,
                dataset,
                rule,
                wildcard,
                format,
                scale,
            } => self.run_render(
                out_dir,
                ids,
                dataset.as_deref(),
                rule.into_rule(wildcard.clone()),
                *format,
                *scale,
            ),
        }
    }

    fn run_generate(output: &Path, total: usize, sold: usize, seed: u64) -> Result<()> {
        let config = GeneratorConfig {
            total_plots: total,
            sold_plots: sold,
            seed,
        };

        let dataset = generator::generate_dataset(&config)?;
        dataset.write_json_file(output)?;
        tracing::info!(path = %output.display(), "dataset written");

        Ok(())
    }

    // Result listings go to stdout by design
    #[allow(clippy::print_stdout)]
    fn run_search(
        dataset_path: &Path,
        rule: PatternRule,
        status: StatusFilter,
        order: SortOrder,
        page: usize,
        page_size: usize,
        json: bool,
    ) -> Result<()> {
        let dataset = Dataset::from_json_file(dataset_path)?;
        let query = SearchQuery {
            rule,
            status,
            order,
        };

        let results = query.execute(&dataset.lands);
        let pages = search::page_count(results.len(), page_size);
        let page_items = search::paginate(&results, page, page_size);

        if json {
            println!("{}", encode_json(&page_items)?);
            return Ok(());
        }

        println!(
            "{} plots match rule '{}' ({} page{} of up to {} plots)",
            results.len(),
            query.rule.label(),
            pages,
            if pages == 1 { "" } else { "s" },
            page_size
        );
        for plot in page_items {
            println!("{}", format_plot_line(plot));
        }

        Ok(())
    }

    #[allow(clippy::print_stdout)]
    fn run_owners(
        dataset_path: &Path,
        address: Option<&str>,
        sort: OwnerSortKey,
        ascending: bool,
        json: bool,
    ) -> Result<()> {
        let dataset = Dataset::from_json_file(dataset_path)?;
        let report = owners::concentration_report(&dataset.lands);

        let mut filtered = match address {
            Some(term) => owners::filter_by_address(&report, term),
            None => report,
        };

        let direction = if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        owners::sort_records(&mut filtered, sort, direction);

        if json {
            println!("{}", encode_json(&filtered)?);
            return Ok(());
        }

        let summary = owners::summarize(&filtered);
        println!(
            "{} owners holding {} plots ({} per owner on average)",
            summary.total_owners, summary.total_owned, summary.average_owned
        );
        for record in &filtered {
            println!(
                "{:<44} {:>6} plots {:>7.2}%",
                record.address, record.plots_owned, record.percentage
            );
        }

        Ok(())
    }

    #[allow(clippy::print_stdout)]
    fn run_stats(dataset_path: &Path, json: bool) -> Result<()> {
        let dataset = Dataset::from_json_file(dataset_path)?;
        let stats = dataset.stats();

        if json {
            println!("{}", encode_json(&stats)?);
            return Ok(());
        }

        println!("Total plots: {}", stats.total);
        println!("Sold:        {} ({}%)", stats.sold, stats.sold_percentage);
        println!("Available:   {}", stats.available);

        Ok(())
    }

    #[allow(clippy::print_stdout)]
    fn run_show(dataset_path: &Path, id: u64, coordination: Option<&Path>) -> Result<()> {
        let dataset = Dataset::from_json_file(dataset_path)?;
        let plot = dataset
            .plot(id)
            .ok_or_else(|| CatalogueError::PlotNotFound {
                id,
                catalogue_size: dataset.lands.len(),
            })?;

        println!("{}", format_plot_line(plot));
        println!("image: {}", svg::synthesize(plot.id));

        if let Some(path) = coordination {
            let index = CoordinateIndex::from_json_file(path)?;
            if let Some(entry) = index.entry(plot.id) {
                println!("hosted image: {}", entry.image_url);
                println!(
                    "hosted bounds: long [{:.2}, {:.2}] lat [{:.2}, {:.2}]",
                    entry.coordinates.longitude.min,
                    entry.coordinates.longitude.max,
                    entry.coordinates.latitude.min,
                    entry.coordinates.latitude.max
                );
            } else {
                tracing::warn!(id = plot.id, "no coordination entry for plot");
            }
        }

        Ok(())
    }

    fn run_render(
        &self,
        out_dir: &Path,
        ids: &[u64],
        dataset: Option<&Path>,
        rule: PatternRule,
        format: FormatArg,
        scale: u32,
    ) -> Result<()> {
        let targets: Vec<u64> = if ids.is_empty() {
            let Some(path) = dataset else {
                return Err(invalid_parameter(
                    "dataset",
                    &"<missing>",
                    &"required when no --id values are given",
                ));
            };

            let loaded = Dataset::from_json_file(path)?;
            let query = SearchQuery {
                rule,
                status: StatusFilter::Any,
                order: SortOrder::IdAscending,
            };
            query.execute(&loaded.lands).iter().map(|plot| plot.id).collect()
        } else {
            ids.to_vec()
        };

        if targets.is_empty() {
            tracing::warn!("no plots selected, nothing to render");
            return Ok(());
        }

        std::fs::create_dir_all(out_dir).map_err(|e| CatalogueError::FileSystem {
            path: out_dir.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;

        let progress = RenderProgress::new(!self.cli.quiet && targets.len() > 1, targets.len());

        for &id in &targets {
            let matrix = ColorMatrix::generate(id);
            match format {
                FormatArg::Svg => {
                    let path = out_dir.join(format!("plot_{id}.svg"));
                    std::fs::write(&path, svg::render_svg(&matrix)).map_err(|e| {
                        CatalogueError::FileSystem {
                            path,
                            operation: "write file",
                            source: e,
                        }
                    })?;
                }
                FormatArg::Png => {
                    let path = out_dir.join(format!("plot_{id}.png"));
                    let path_str = path.to_str().ok_or_else(|| {
                        invalid_parameter("out-dir", &path.display(), &"path is not valid UTF-8")
                    })?;
                    export_matrix_png(&matrix, scale, path_str)?;
                }
            }
            progress.advance();
        }

        progress.finish();
        tracing::info!(count = targets.len(), dir = %out_dir.display(), "render complete");

        Ok(())
    }
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CatalogueError::DatasetEncode {
        path: PathBuf::from("<stdout>"),
        source: e,
    })
}

fn format_plot_line(plot: &Plot) -> String {
    let status = if plot.is_sold { "sold" } else { "available" };
    let owner = plot.owner.as_deref().unwrap_or("-");

    format!(
        "#{:<6} {:<9} {:<44} long [{:.2}, {:.2}] lat [{:.2}, {:.2}]",
        plot.id,
        status,
        owner,
        plot.coordinates.longitude.min,
        plot.coordinates.longitude.max,
        plot.coordinates.latitude.min,
        plot.coordinates.latitude.max
    )
}
