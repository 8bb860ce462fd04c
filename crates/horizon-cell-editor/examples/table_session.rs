//! A headless table host driving per-column cell editors.
//!
//! Run with `RUST_LOG=horizon_cell_editor=debug cargo run --example table_session`
//! to see the editor's diagnostics.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_cell_editor::rules::{InRange, Pattern, non_negative};
use horizon_cell_editor::{
    BlankPolicy, CellValue, CommitOutcome, DoubleEditor, EditContext, EditorBuilder,
    IntegerEditor, TextField, ValidatingCellEditor,
};

/// A tiny in-memory table: item code, quantity, unit price.
struct Table {
    rows: Vec<[CellValue; 3]>,
}

impl Table {
    fn print(&self) {
        println!("{:<8} {:>8} {:>10}", "code", "qty", "price");
        for row in &self.rows {
            println!(
                "{:<8} {:>8} {:>10}",
                row[0].display_text(),
                row[1].display_text(),
                row[2].display_text()
            );
        }
        println!();
    }
}

/// Simulates a user typing each entry in turn until one commits or input runs out.
fn edit_cell<T>(
    table: &mut Table,
    editor: &mut ValidatingCellEditor<T>,
    row: usize,
    column: usize,
    typed: &[&str],
) where
    T: Clone + Into<CellValue>,
{
    let context = EditContext::new(row, column);
    editor.begin_edit(TextField::new(), &table.rows[row][column], context);

    for text in typed {
        let Some(field) = editor.component_mut() else {
            return;
        };
        field.type_text(text);

        match editor.attempt_commit() {
            Ok(CommitOutcome::Rejected(reason)) => {
                println!("cell {context}: {text:?} rejected ({reason})");
            }
            Ok(_) => {
                table.rows[row][column] = editor.cell_value();
                println!("cell {context}: {text:?} committed");
                if let Err(err) = editor.finish_edit() {
                    eprintln!("cell {context}: {err}");
                }
                return;
            }
            Err(err) => {
                eprintln!("cell {context}: {err}");
                return;
            }
        }
    }

    editor.cancel();
    println!("cell {context}: edit canceled");
}

fn count_rejections<T>(editor: &mut ValidatingCellEditor<T>, counter: &Arc<AtomicUsize>) {
    let counter = Arc::clone(counter);
    editor.on_validation_failed(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut table = Table {
        rows: vec![
            [CellValue::from("AB-100"), CellValue::Int(4), CellValue::Float(2.5)],
            [CellValue::from("CD-200"), CellValue::Int(1), CellValue::Float(10.0)],
        ],
    };
    table.print();

    let rejections = Arc::new(AtomicUsize::new(0));

    let mut codes = EditorBuilder::<String>::text()
        .rule(Pattern::new(r"[A-Z]{2}-\d{3}")?)
        .build()?;
    let mut quantities: IntegerEditor = IntegerEditor::new(InRange::new(0, 999));
    let mut prices: DoubleEditor = DoubleEditor::new(non_negative::<f64>());
    prices.set_blank_policy(BlankPolicy::Clear);

    count_rejections(&mut codes, &rejections);
    count_rejections(&mut quantities, &rejections);
    count_rejections(&mut prices, &rejections);

    edit_cell(&mut table, &mut codes, 0, 0, &["ab-100", "AB-101"]);
    edit_cell(&mut table, &mut quantities, 0, 1, &["four", "4.5", "-2", "12"]);
    edit_cell(&mut table, &mut prices, 1, 2, &["-1", "NaN", ""]);
    edit_cell(&mut table, &mut quantities, 1, 1, &["1000"]);

    println!();
    table.print();
    println!("{} rejected attempts", rejections.load(Ordering::SeqCst));
    Ok(())
}
