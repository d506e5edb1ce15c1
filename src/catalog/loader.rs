//! CSV catalog loader with header normalization
//!
//! Column naming varies across catalog versions ("Precios de Lista" vs
//! "Precio de Lista", accented vs plain headers). The loader maps every
//! known variant onto the canonical columns the core expects, so the rest
//! of the crate never sees raw headers.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use super::row::CatalogRow;

/// Catalog load failure, reported once at the CLI boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {path:?} is not valid CSV: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("catalog {path:?} is missing required column {column:?}")]
    MissingColumn { path: PathBuf, column: &'static str },
}

const CATEGORY_ALIASES: &[&str] = &["categoria", "categoría"];
const MODEL_ALIASES: &[&str] = &["modelo"];
const PRODUCT_ALIASES: &[&str] = &["producto", "descripcion", "descripción"];
const CURRENCY_ALIASES: &[&str] = &["moneda"];
const LIST_ALIASES: &[&str] = &["precios de lista", "precio de lista", "lista"];
const CONTRACTOR_ALIASES: &[&str] = &[
    "precio contratista sin flete",
    "precio contratista",
    "contratista",
];
const FACTORY_ALIASES: &[&str] = &[
    "precio fabrica",
    "precio fábrica",
    "precio de fabrica",
    "fabrica",
];
const PUBLIC_ALIASES: &[&str] = &["precio publico", "precio público", "publico"];

/// Load and normalize the catalog CSV into rows, in file order.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogRow>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|source| CatalogError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let header_map = build_header_map(&headers);
    let columns = Columns::resolve(&header_map, path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| CatalogError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(row) = columns.row_from(&record) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Map from lowercased, trimmed header name to column index.
fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase().trim().to_string(), i))
        .collect()
}

fn find_column(header_map: &HashMap<String, usize>, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| header_map.get(*alias).copied())
}

/// Resolved column indices for one catalog file.
struct Columns {
    category: usize,
    model: usize,
    product: usize,
    currency: usize,
    list: Option<usize>,
    contractor: Option<usize>,
    factory: Option<usize>,
    public: Option<usize>,
}

impl Columns {
    fn resolve(header_map: &HashMap<String, usize>, path: &Path) -> Result<Self, CatalogError> {
        let required = |aliases: &[&str], column: &'static str| {
            find_column(header_map, aliases).ok_or_else(|| CatalogError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })
        };

        Ok(Columns {
            category: required(CATEGORY_ALIASES, "CATEGORIA")?,
            model: required(MODEL_ALIASES, "Modelo")?,
            product: required(PRODUCT_ALIASES, "PRODUCTO")?,
            currency: required(CURRENCY_ALIASES, "Moneda")?,
            list: find_column(header_map, LIST_ALIASES),
            contractor: find_column(header_map, CONTRACTOR_ALIASES),
            factory: find_column(header_map, FACTORY_ALIASES),
            public: find_column(header_map, PUBLIC_ALIASES),
        })
    }

    /// Build a row from a CSV record; blank records yield None.
    fn row_from(&self, record: &StringRecord) -> Option<CatalogRow> {
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();

        let category = field(self.category);
        let model = field(self.model);
        if category.is_empty() && model.is_empty() {
            return None;
        }

        let price = |idx: Option<usize>| idx.and_then(|i| record.get(i)).and_then(parse_price);

        Some(CatalogRow {
            category,
            model,
            product: field(self.product),
            currency: field(self.currency),
            list_price: price(self.list),
            contractor_price: price(self.contractor),
            factory_price: price(self.factory),
            public_price: price(self.public),
        })
    }
}

/// Parse a money cell, tolerating "$" and thousands separators.
/// Unparseable or negative cells degrade to absent.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|price| *price >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_canonical_headers() {
        let file = write_catalog(
            "CATEGORIA,Modelo,PRODUCTO,Moneda,Precios de Lista,Precio Contratista sin flete,Precio Fabrica\n\
             AXIAL, AX-10 ,VENTILADOR AXIAL 10,MXN,1000,900,700\n",
        );
        let rows = load_catalog(file.path()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "AXIAL");
        assert_eq!(rows[0].model, "AX-10");
        assert_eq!(rows[0].list_price, Some(1000.0));
        assert_eq!(rows[0].contractor_price, Some(900.0));
        assert_eq!(rows[0].factory_price, Some(700.0));
        assert_eq!(rows[0].public_price, None);
    }

    #[test]
    fn test_load_header_variants() {
        let file = write_catalog(
            "categoria,MODELO,Producto,MONEDA,Precio de Lista,Precio Publico\n\
             AXIAL,AX-10,VENTILADOR,MXN,1500,1800\n",
        );
        let rows = load_catalog(file.path()).unwrap();

        assert_eq!(rows[0].list_price, Some(1500.0));
        assert_eq!(rows[0].public_price, Some(1800.0));
    }

    #[test]
    fn test_load_cleans_money_cells() {
        let file = write_catalog(
            "CATEGORIA,Modelo,PRODUCTO,Moneda,Precios de Lista\n\
             AXIAL,AX-10,VENTILADOR,MXN,\"$1,234.50\"\n",
        );
        let rows = load_catalog(file.path()).unwrap();
        assert_eq!(rows[0].list_price, Some(1234.5));
    }

    #[test]
    fn test_load_degrades_bad_price_cells() {
        let file = write_catalog(
            "CATEGORIA,Modelo,PRODUCTO,Moneda,Precios de Lista\n\
             AXIAL,AX-10,VENTILADOR,MXN,consultar\n\
             AXIAL,AX-12,VENTILADOR,MXN,-5\n",
        );
        let rows = load_catalog(file.path()).unwrap();
        assert_eq!(rows[0].list_price, None);
        assert_eq!(rows[1].list_price, None);
    }

    #[test]
    fn test_load_skips_blank_records() {
        let file = write_catalog(
            "CATEGORIA,Modelo,PRODUCTO,Moneda\n\
             AXIAL,AX-10,VENTILADOR,MXN\n\
             ,,,\n",
        );
        let rows = load_catalog(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_load_missing_required_column() {
        let file = write_catalog("CATEGORIA,PRODUCTO,Moneda\nAXIAL,VENTILADOR,MXN\n");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingColumn {
                column: "Modelo",
                ..
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/productos.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
