//! CSV serialization of a [`RowMatrix`] and browser download.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::RowMatrix;

const SEPARATOR: char = ';';

/// Serializes the matrix as `;`-separated CSV with a UTF-8 BOM so spreadsheet
/// programs pick the right encoding for the rupee sign.
pub fn to_csv(matrix: &RowMatrix) -> String {
    let mut content = String::from('\u{FEFF}');
    push_row(&mut content, &matrix.header);
    for row in &matrix.rows {
        push_row(&mut content, row);
    }
    content
}

fn push_row(content: &mut String, cells: &[String]) {
    let escaped: Vec<String> = cells.iter().map(|cell| escape_cell(cell)).collect();
    content.push_str(&escaped.join(&SEPARATOR.to_string()));
    content.push('\n');
}

fn escape_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Serializes the matrix and triggers a download named `filename`.
pub fn download_csv(matrix: &RowMatrix, filename: &str) -> Result<(), String> {
    if matrix.is_empty() {
        return Err("No records to export".to_string());
    }

    let blob = create_csv_blob(&to_csv(matrix))?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<&str>>) -> RowMatrix {
        RowMatrix {
            header: vec!["Name".into(), "Amount".into()],
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        }
    }

    #[test]
    fn test_to_csv_layout() {
        let csv = to_csv(&matrix(vec![vec!["Paracetamol", "₹1,012.50"]]));
        assert_eq!(csv, "\u{FEFF}Name;Amount\nParacetamol;₹1,012.50\n");
    }

    #[test]
    fn test_cells_with_separators_are_quoted() {
        let csv = to_csv(&matrix(vec![vec!["Cough; cold", "say \"hi\""], vec!["two\nlines", "1"]]));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').splitn(2, '\n').collect();
        assert_eq!(lines[0], "Name;Amount");
        assert_eq!(
            lines[1],
            "\"Cough; cold\";\"say \"\"hi\"\"\"\n\"two\nlines\";1\n"
        );
    }

    #[test]
    fn test_empty_matrix_is_refused() {
        assert_eq!(
            download_csv(&matrix(vec![]), "empty.csv"),
            Err("No records to export".to_string())
        );
    }
}
