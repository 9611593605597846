//! Single-pass menu rate engine.
//!
//! For each event the engine evaluates every cached trigger in menu order,
//! adds the event weight to each passing trigger, to the only passing
//! trigger when exactly one passes, and to the any-pass total when at least
//! one passes. All updates are plain sums.
//!
//! In parallel modes the sample is cut into contiguous chunks of
//! `chunk_size` events. Each chunk is summed on its own and the partial sums
//! are merged in chunk order, so the result does not depend on the number of
//! threads.

use l1menu_config::{Parallelism, RateConfig};
use l1menu_core::{CachedTrigger, Sample, TriggerMenu};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::RateError;
use crate::menu_rate::MenuRate;
use crate::sums::WeightSums;

type Evaluators<E> = Vec<Box<dyn CachedTrigger<E>>>;

/// Computes [`MenuRate`]s.
///
/// Holds no state between runs; computing the same menu on the same sample
/// twice gives bit-identical results.
#[derive(Debug, Clone, Default)]
pub struct MenuRateEngine {
    config: RateConfig,
}

impl MenuRateEngine {
    pub fn new(config: RateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Runs every trigger of `menu` over `sample` once.
    ///
    /// # Errors
    ///
    /// Fails if the sample cannot build a cached trigger, if a dedicated
    /// worker pool cannot be created, or if the sample has zero total weight
    /// and the configuration rejects degenerate samples.
    ///
    /// # Panics
    ///
    /// Panics if the menu's constraint count differs from its trigger count.
    pub fn compute<S: Sample>(
        &self,
        menu: &TriggerMenu,
        sample: &S,
    ) -> Result<MenuRate, RateError> {
        assert_eq!(
            menu.constraints().len(),
            menu.number_of_triggers(),
            "menu constraints out of step with its triggers"
        );

        let events = sample.number_of_events();
        debug!(
            event = "menu_rate_start",
            triggers = menu.number_of_triggers(),
            events,
            mode = ?self.config.parallelism,
        );

        let evaluators = menu
            .triggers()
            .map(|trigger| sample.create_cached_trigger(trigger))
            .collect::<l1menu_core::Result<Evaluators<S::Event>>>()?;

        let sums = match self.config.parallelism {
            Parallelism::Serial => accumulate_serial(sample, &evaluators),
            Parallelism::Auto => accumulate_chunked(sample, &evaluators, self.config.chunk_size),
            Parallelism::Threads(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|err| RateError::ThreadPool(err.to_string()))?;
                pool.install(|| accumulate_chunked(sample, &evaluators, self.config.chunk_size))
            }
        };

        if sums.weight_all == 0.0 {
            warn!(event = "degenerate_sample", events);
            if self.config.reject_degenerate_sample {
                return Err(RateError::DegenerateSample { events });
            }
        }

        let rate = MenuRate::from_sums(menu, sums, sample.event_rate());
        info!(
            event = "menu_rate_end",
            total_rate = rate.total_rate(),
            total_rate_error = rate.total_rate_error(),
            weight_of_all_events = rate.weight_of_all_events().unwrap_or(f64::NAN),
        );
        Ok(rate)
    }
}

fn accumulate_serial<S: Sample>(
    sample: &S,
    evaluators: &[Box<dyn CachedTrigger<S::Event>>],
) -> WeightSums {
    let mut sums = WeightSums::new(evaluators.len());
    for index in 0..sample.number_of_events() {
        sums.add_event(evaluators, sample.get_event(index));
    }
    sums
}

fn accumulate_chunked<S: Sample>(
    sample: &S,
    evaluators: &[Box<dyn CachedTrigger<S::Event>>],
    chunk_size: usize,
) -> WeightSums {
    let events = sample.number_of_events();
    let chunk_size = chunk_size.max(1);

    let partials: Vec<WeightSums> = (0..events.div_ceil(chunk_size))
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * chunk_size;
            let end = (start + chunk_size).min(events);
            let mut sums = WeightSums::new(evaluators.len());
            for index in start..end {
                sums.add_event(evaluators, sample.get_event(index));
            }
            sums
        })
        .collect();

    partials
        .iter()
        .fold(WeightSums::new(evaluators.len()), |mut total, partial| {
            total.merge(partial);
            total
        })
}
