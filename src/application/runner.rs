//! Sweep Runner
//!
//! Runs the planned categories in order against one environment. The first
//! unrecoverable error stops the run.

use std::collections::BTreeMap;

use crate::domain::ports::{SweepEvent, SweepEventSink};
use crate::error::SweepResult;

use super::categories::{sweep_category, Category, CategoryReport, CategorySettings};
use super::environment::TargetEnvironment;

/// Which categories to sweep, with their settings, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepPlan {
    entries: BTreeMap<Category, CategorySettings>,
}

impl SweepPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every category with its built-in defaults.
    pub fn all() -> Self {
        Category::ALL
            .into_iter()
            .fold(Self::new(), |plan, c| plan.with(c, CategorySettings::default()))
    }

    /// A single category.
    pub fn only(category: Category, settings: CategorySettings) -> Self {
        Self::new().with(category, settings)
    }

    pub fn with(mut self, category: Category, settings: CategorySettings) -> Self {
        self.entries.insert(category, settings);
        self
    }

    pub fn settings_mut(&mut self, category: Category) -> Option<&mut CategorySettings> {
        self.entries.get_mut(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What each category did in a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub categories: Vec<(Category, CategoryReport)>,
}

impl RunSummary {
    pub fn matched(&self) -> usize {
        self.categories
            .iter()
            .map(|(_, report)| match report {
                CategoryReport::Swept { matched } => *matched,
                CategoryReport::Skipped(_) => 0,
            })
            .sum()
    }

    /// Categories that ended without evaluating anything.
    pub fn skipped(&self) -> usize {
        self.categories
            .iter()
            .filter(|(_, report)| matches!(report, CategoryReport::Skipped(_)))
            .count()
    }
}

pub struct SweepRunner<'a> {
    env: &'a TargetEnvironment,
    sink: &'a dyn SweepEventSink,
}

impl<'a> SweepRunner<'a> {
    pub fn new(env: &'a TargetEnvironment, sink: &'a dyn SweepEventSink) -> Self {
        Self { env, sink }
    }

    pub fn run(&self, plan: &SweepPlan) -> SweepResult<RunSummary> {
        self.sink.on_event(SweepEvent::Started {
            environment_id: self.env.environment_id().to_string(),
            dry_run: self.env.dry_run(),
            category_count: plan.len(),
        });
        tracing::info!(
            environment_id = self.env.environment_id(),
            dry_run = self.env.dry_run(),
            categories = plan.len(),
            "Starting sweep"
        );

        let result = self.run_categories(plan);
        self.sink.on_event(SweepEvent::Completed {
            success: result.is_ok(),
        });

        if let Err(err) = &result {
            tracing::error!(code = err.code(), "Sweep aborted");
        }
        result
    }

    fn run_categories(&self, plan: &SweepPlan) -> SweepResult<RunSummary> {
        let mut summary = RunSummary::default();
        for (category, settings) in &plan.entries {
            self.env.cancel().check()?;
            let report = sweep_category(*category, settings, self.env, self.sink)?;
            summary.categories.push((*category, report));
        }
        Ok(summary)
    }
}
