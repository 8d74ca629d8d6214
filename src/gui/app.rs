//! Review Dashboard Main Application
//! Main window with control panel, tab bar and the three dashboard tabs.

use crate::analysis::ViewCalculator;
use crate::charts::renderer_for;
use crate::config::DashboardConfig;
use crate::data::{LoaderError, ReviewProcessor, ReviewTable, StopwordFilter, TableCache};
use crate::gui::control_panel::TableSummary;
use crate::gui::{narrative, ChartViewer, ControlPanel, ControlPanelAction, ReviewTableView};
use egui::SidePanel;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Review loading result from background thread
#[derive(Debug)]
enum LoadResult {
    Progress(String),
    Complete(ReviewTable),
    Error(String),
}

/// Status line for a failed load. Every loader error means the data is unavailable.
fn unavailable_status(error: &LoaderError) -> String {
    format!("Error: data unavailable ({})", error)
}

/// Take everything the loader has sent so far.
///
/// The flag is true once the load has finished, including when the loader
/// thread went away without reporting a result.
fn drain_results(rx: &Receiver<LoadResult>) -> (Vec<LoadResult>, bool) {
    let mut results = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(result) => {
                let done = !matches!(result, LoadResult::Progress(_));
                results.push(result);
                if done {
                    return (results, true);
                }
            }
            Err(TryRecvError::Empty) => return (results, false),
            Err(TryRecvError::Disconnected) => {
                tracing::error!("loader thread exited without a result");
                results.push(LoadResult::Error(
                    "Error: loader stopped unexpectedly".to_string(),
                ));
                return (results, true);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Dashboard,
    Reviews,
    Summary,
}

/// Main application window.
pub struct ReviewDashboardApp {
    config: DashboardConfig,
    stopwords: Arc<StopwordFilter>,
    cache: TableCache,
    tab: Tab,

    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    table_view: ReviewTableView,

    // Async reload
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl ReviewDashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let stopwords = Arc::new(StopwordFilter::for_reviews(
            &config.stopword_language,
            &config.extra_stopwords,
        ));
        tracing::info!(
            language = %config.stopword_language,
            stopwords = stopwords.len(),
            "stopword set ready"
        );
        if stopwords.is_empty() {
            tracing::warn!("stopword set is empty, review text is only lower-cased");
        }

        let mut app = Self {
            control_panel: ControlPanel::new(config.chart_style),
            chart_viewer: ChartViewer::new(renderer_for(config.chart_style)),
            table_view: ReviewTableView::new(config.preview_rows, config.filtered_rows),
            config,
            stopwords,
            cache: TableCache::new(),
            tab: Tab::Dashboard,
            load_rx: None,
            is_loading: false,
        };
        app.load_initial();
        app
    }

    /// One-shot startup load through the table cache.
    fn load_initial(&mut self) {
        let path = self.config.data_path.clone();
        self.control_panel.csv_path = Some(path.clone());

        let stopwords = Arc::clone(&self.stopwords);
        match self
            .cache
            .get_or_init(&path, |p| ReviewProcessor::load_table(p, &stopwords))
        {
            Ok(table) => self.install(table),
            Err(e) => self.report_load_error(&path, &e),
        }
    }

    fn report_load_error(&mut self, path: &Path, error: &LoaderError) {
        tracing::error!(path = %path.display(), error = %error, "review data unavailable");
        self.chart_viewer.clear();
        self.table_view.clear();
        self.control_panel.summary = None;
        self.control_panel.set_status(&unavailable_status(error));
    }

    /// Derive every view from a freshly loaded table.
    fn install(&mut self, table: Arc<ReviewTable>) {
        let distribution = ViewCalculator::distribution(&table);
        let lexical =
            ViewCalculator::lexical(&table, self.config.top_words, self.config.word_cloud_words);

        self.chart_viewer.set_views(distribution, lexical);
        self.table_view.set_table(Arc::clone(&table));
        self.control_panel.csv_path = Some(table.source().to_path_buf());
        self.control_panel.summary = Some(TableSummary::from_table(&table));
        self.control_panel
            .set_status(&format!("Loaded {} reviews", table.len()));
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_reload(path);
        }
    }

    /// Reload in a background thread; the cache is swapped only on success.
    fn start_reload(&mut self, path: PathBuf) {
        if self.is_loading {
            return; // Already loading
        }

        self.control_panel.set_status("Loading CSV file...");
        self.is_loading = true;
        self.control_panel.busy = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        let stopwords = Arc::clone(&self.stopwords);

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress(format!(
                "Reading {}...",
                path.display()
            )));

            match ReviewProcessor::load_table(&path, &stopwords) {
                Ok(table) => {
                    let _ = tx.send(LoadResult::Complete(table));
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "reload failed");
                    let _ = tx.send(LoadResult::Error(unavailable_status(&e)));
                }
            }
        });
    }

    /// Check for loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };
        let (results, finished) = drain_results(&rx);

        for result in results {
            match result {
                LoadResult::Progress(status) => {
                    self.control_panel.set_status(&status);
                }
                LoadResult::Complete(table) => {
                    let table = self.cache.replace(table);
                    tracing::info!(loads = self.cache.loads(), "review table replaced");
                    self.install(table);
                }
                LoadResult::Error(status) => {
                    self.control_panel.set_status(&status);
                }
            }
        }

        if finished {
            self.is_loading = false;
            self.control_panel.busy = false;
        } else {
            self.load_rx = Some(rx);
        }
    }

    fn reload_current(&mut self) {
        let path = self
            .cache
            .get()
            .map(|t| t.source().to_path_buf())
            .or_else(|| self.control_panel.csv_path.clone());
        if let Some(path) = path {
            self.start_reload(path);
        }
    }
}

impl eframe::App for ReviewDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::Reload => self.reload_current(),
                        ControlPanelAction::ChartStyleChanged(style) => {
                            self.chart_viewer.set_renderer(renderer_for(style));
                        }
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Tab bar
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Dashboard, "📊 Dashboard");
                ui.selectable_value(&mut self.tab, Tab::Reviews, "🗂️ Reviews");
                ui.selectable_value(&mut self.tab, Tab::Summary, "📝 Summary");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Dashboard => self.chart_viewer.show(ui),
            Tab::Reviews => self.table_view.show(ui),
            Tab::Summary => narrative::show(ui),
        });
    }
}
