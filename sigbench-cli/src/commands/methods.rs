use std::path::Path;

use serde::Serialize;
use sigbench::rebuild::{rebuild_descriptor, SyntheticFactory};
use sigbench::render::render_buffered_str;

use crate::app::GlobalOptions;
use crate::commands::common::load_fixture;
use crate::output::{plain_table, print_output, print_table, right_align};

#[derive(Debug, Serialize)]
struct MethodEntry {
    name: String,
    param_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<String>,
}

#[derive(Debug, Serialize)]
struct MethodsOutput {
    methods: Vec<MethodEntry>,
    count: usize,
}

pub fn run(path: &Path, signatures: bool, opts: &GlobalOptions) -> anyhow::Result<()> {
    let descriptors = load_fixture(path)?;

    let mut methods = Vec::new();
    for (name, descriptor) in &descriptors {
        let signature = if signatures {
            let handle = rebuild_descriptor(descriptor, &SyntheticFactory)?;
            Some(render_buffered_str(&handle))
        } else {
            None
        };

        methods.push(MethodEntry {
            name: name.clone(),
            param_count: descriptor.parameters.len(),
            signature,
        });
    }

    let count = methods.len();
    let result = MethodsOutput { methods, count };

    print_output(&result, opts, |out| {
        let mut headers = vec!["Method", "Params"];
        if signatures {
            headers.push("Signature");
        }

        let mut table = plain_table(&headers);
        right_align(&mut table, 1);
        for entry in &out.methods {
            let mut row = vec![entry.name.clone(), entry.param_count.to_string()];
            if let Some(signature) = &entry.signature {
                row.push(signature.clone());
            }
            table.add_row(row);
        }

        print_table(&table, "");
        println!("\n{} method(s) listed.", out.count);
    })
}
