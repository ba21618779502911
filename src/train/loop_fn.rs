use crate::error::{NnError, Stage};
use crate::math::Vector;
use crate::network::{Forward, Trainable};
use crate::train::samples::Sample;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// One pass of online SGD over `samples`, in order.
///
/// Every sample runs calculate → generate_delta → update before the next one
/// is looked at, so later samples see the parameters left by earlier ones.
/// Only `batch_size == 1` is implemented.
///
/// A failure aborts the pass and is reported with the index of the sample and
/// the step that failed; updates from earlier samples are kept.
pub fn train<N>(network: &mut N, batch_size: usize, samples: &[Sample]) -> Result<(), NnError>
where
    N: Trainable + ?Sized,
{
    if batch_size != 1 {
        return Err(NnError::UnsupportedBatchSize(batch_size));
    }

    for (idx, sample) in samples.iter().enumerate() {
        network
            .calculate(&sample.input)
            .map_err(|e| e.at_sample(Stage::Calculate, idx))?;

        let deltas = network
            .generate_delta(&sample.target)
            .map_err(|e| e.at_sample(Stage::GenerateDelta, idx))?;

        network
            .update(&deltas)
            .map_err(|e| e.at_sample(Stage::Update, idx))?;

        log::trace!("trained on sample {idx}");
    }

    Ok(())
}

/// Number of samples whose output `judge` accepts.
pub fn evaluate<N, J>(network: &mut N, judge: J, samples: &[Sample]) -> Result<usize, NnError>
where
    N: Forward + ?Sized,
    J: Fn(&Vector, &Vector) -> bool,
{
    let mut correct = 0;

    for (idx, sample) in samples.iter().enumerate() {
        let actual = network
            .calculate(&sample.input)
            .map_err(|e| e.at_sample(Stage::Calculate, idx))?;

        if judge(&actual, &sample.target) {
            correct += 1;
        }
    }

    Ok(correct)
}

/// Runs `epochs` rounds of evaluate-then-train and returns the correct count
/// of every round. Entry `k` is measured before epoch `k` trains, so the first
/// entry scores the untrained network.
pub fn train_and_evaluate<N, J>(
    network: &mut N,
    epochs: usize,
    batch_size: usize,
    judge: J,
    samples: &[Sample],
) -> Result<Vec<usize>, NnError>
where
    N: Trainable + ?Sized,
    J: Fn(&Vector, &Vector) -> bool,
{
    let mut correct_counts = Vec::with_capacity(epochs);

    for epoch in 0..epochs {
        let correct = evaluate(network, &judge, samples)?;
        log::debug!("epoch {epoch}: {correct} / {} correct", samples.len());
        correct_counts.push(correct);

        train(network, batch_size, samples)?;
    }

    Ok(correct_counts)
}
