use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use sigbench::rebuild::rebuild_from_json;
use sigbench::render::render_concat;

use crate::app::GlobalOptions;
use crate::output::{plain_table, print_output, print_table};

#[derive(Debug, Serialize)]
struct ParameterInfo {
    name: String,
    tag: String,
    clr_type: String,
}

#[derive(Debug, Serialize)]
struct ShowOutput {
    method: String,
    param_count: usize,
    signature: String,
    parameters: Vec<ParameterInfo>,
}

pub fn run(path: &Path, method: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let handle = rebuild_from_json(path, method)
        .with_context(|| format!("failed to rebuild '{}' from {}", method, path.display()))?;

    let parameters = handle
        .params()
        .iter()
        .map(|param| ParameterInfo {
            name: param.name.clone(),
            tag: param.kind.tag().to_string(),
            clr_type: param.kind.clr_name().to_string(),
        })
        .collect();

    let result = ShowOutput {
        method: handle.name().to_string(),
        param_count: handle.param_count(),
        signature: render_concat(&handle),
        parameters,
    };

    print_output(&result, opts, |out| {
        println!("Method:     {}", out.method);
        println!("Parameters: {}", out.param_count);
        println!("Signature:  {}", out.signature);

        if !out.parameters.is_empty() {
            println!();
            let mut table = plain_table(&["Name", "Tag", "CLR Type"]);
            for param in &out.parameters {
                table.add_row(vec![
                    param.name.clone(),
                    param.tag.clone(),
                    param.clr_type.clone(),
                ]);
            }
            print_table(&table, "  ");
        }
    })
}
