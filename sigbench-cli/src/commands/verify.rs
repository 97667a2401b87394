use std::path::Path;

use anyhow::bail;
use serde::Serialize;
use sigbench::rebuild::{rebuild_descriptor, SyntheticFactory};
use sigbench::render::{render_concat, STRATEGIES};

use crate::app::GlobalOptions;
use crate::commands::common::load_fixture;
use crate::output::print_output;

#[derive(Debug, Serialize)]
struct MethodCheck {
    method: String,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    mismatches: Vec<String>,
}

#[derive(Debug, Serialize)]
struct VerifyResult {
    path: String,
    passed: bool,
    checked: usize,
    failed: usize,
    checks: Vec<MethodCheck>,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let descriptors = load_fixture(path)?;

    let mut checks = Vec::new();
    for (name, descriptor) in &descriptors {
        let check = match rebuild_descriptor(descriptor, &SyntheticFactory) {
            Ok(handle) => {
                let reference = render_concat(&handle);
                let mismatches: Vec<String> = STRATEGIES
                    .iter()
                    .filter(|(_, render)| render(&handle) != reference)
                    .map(|(strategy, _)| (*strategy).to_string())
                    .collect();
                log::debug!("verified {name}: {reference}");

                MethodCheck {
                    method: name.clone(),
                    passed: mismatches.is_empty()
                        && handle.param_count() == descriptor.parameters.len(),
                    error: None,
                    mismatches,
                }
            }
            Err(error) => MethodCheck {
                method: name.clone(),
                passed: false,
                error: Some(error.to_string()),
                mismatches: Vec::new(),
            },
        };
        checks.push(check);
    }

    let checked = checks.len();
    let failed = checks.iter().filter(|check| !check.passed).count();
    let result = VerifyResult {
        path: path.display().to_string(),
        passed: failed == 0,
        checked,
        failed,
        checks,
    };

    print_output(&result, opts, |out| {
        for check in &out.checks {
            let status = if check.passed { "PASS" } else { "FAIL" };
            println!("{status}  {}", check.method);
            if let Some(error) = &check.error {
                println!("      {error}");
            }
            for strategy in &check.mismatches {
                println!("      strategy '{strategy}' diverges");
            }
        }
        println!("\n{} method(s) checked, {} failed.", out.checked, out.failed);
    })?;

    if !result.passed {
        bail!("{failed} of {checked} method(s) failed verification");
    }
    Ok(())
}
