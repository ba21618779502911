mod app_config;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use tinynet::data::{fixture, idx};
use tinynet::{evaluate, max_judge, pair_samples, train_and_evaluate, Network, Sample};

use app_config::RunConfig;

/// Trains a feed-forward network and reports per-epoch accuracy.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON run configuration (network layers, weight init, hyperparameters).
    #[arg(short, long)]
    config: PathBuf,

    #[command(subcommand)]
    dataset: Dataset,
}

#[derive(Subcommand)]
enum Dataset {
    /// Labelled vectors from a JSON fixture.
    Fixture {
        path: PathBuf,
        /// Optional held-out fixture scored after training.
        #[arg(long)]
        test: Option<PathBuf>,
    },
    /// Gzip-compressed IDX image/label files.
    Mnist {
        #[arg(long)]
        train_images: PathBuf,
        #[arg(long)]
        train_labels: PathBuf,
        #[arg(long)]
        test_images: PathBuf,
        #[arg(long)]
        test_labels: PathBuf,
        /// Use only the first N training and test samples.
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = RunConfig::load(&cli.config)?;

    let (train_data, test_data) = match cli.dataset {
        Dataset::Fixture { path, test } => {
            let train = fixture::load(&path)?.into_samples()?;
            let test = match test {
                Some(path) => Some(fixture::load(&path)?.into_samples()?),
                None => None,
            };
            (train, test)
        }
        Dataset::Mnist {
            train_images,
            train_labels,
            test_images,
            test_labels,
            limit,
        } => {
            let n_classes = config
                .network
                .layers
                .last()
                .map(|layer| layer.size)
                .context("network has no layers")?;
            let train = load_mnist(&train_images, &train_labels, n_classes, limit)?;
            let test = load_mnist(&test_images, &test_labels, n_classes, limit)?;
            (train, Some(test))
        }
    };

    let mut network = Network::new(&config.network.layers, config.network.weight_init.source())
        .context("invalid network configuration")?
        .with_learning_rate(config.training.learning_rate)
        .with_delta_rule(config.training.delta_rule);

    log::info!(
        "training {} layers on {} samples for {} epochs",
        network.num_layers(),
        train_data.len(),
        config.training.epochs
    );

    let counts = train_and_evaluate(
        &mut network,
        config.training.epochs,
        config.training.batch_size,
        max_judge,
        &train_data,
    )?;
    for (epoch, correct) in counts.iter().enumerate() {
        log::info!("epoch {epoch}: {correct} / {}", train_data.len());
    }

    let final_train = evaluate(&mut network, max_judge, &train_data)?;
    log::info!("after training: {final_train} / {}", train_data.len());

    if let Some(test_data) = test_data {
        let correct = evaluate(&mut network, max_judge, &test_data)?;
        log::info!("test: {correct} / {}", test_data.len());
    }

    Ok(())
}

fn load_mnist(
    images: &Path,
    labels: &Path,
    n_classes: usize,
    limit: Option<usize>,
) -> anyhow::Result<Vec<Sample>> {
    let mut inputs = idx::load_images(images)
        .with_context(|| format!("reading {}", images.display()))?;
    let mut targets = idx::load_labels(labels, n_classes)
        .with_context(|| format!("reading {}", labels.display()))?;

    if let Some(limit) = limit {
        inputs.truncate(limit);
        targets.truncate(limit);
    }

    Ok(pair_samples(inputs, targets)?)
}
