use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use sigbench::descriptor::DescriptorGenerator;

use crate::app::GlobalOptions;
use crate::output::print_output;

#[derive(Debug, Serialize)]
struct GenOutput {
    path: String,
    start: usize,
    end: usize,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

pub fn run(
    output: &Path,
    start: usize,
    end: usize,
    seed: Option<u64>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        start <= end,
        "--start ({start}) must not exceed --end ({end})"
    );

    let mut generator = match seed {
        Some(seed) => DescriptorGenerator::with_seed(seed),
        None => DescriptorGenerator::new(),
    };

    generator
        .generate_and_save(start, end, output)
        .with_context(|| format!("failed to write fixture: {}", output.display()))?;

    let result = GenOutput {
        path: output.display().to_string(),
        start,
        end,
        count: end - start + 1,
        seed,
    };

    print_output(&result, opts, |out| {
        println!("Wrote {} descriptor(s) to {}", out.count, out.path);
        if let Some(seed) = out.seed {
            println!("Seed: {seed}");
        }
    })
}
