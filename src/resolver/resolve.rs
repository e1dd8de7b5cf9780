//! Chart configuration resolution against the field catalog

use crate::catalog::{Catalog, Field};
use crate::error::CompileError;
use crate::query::{ChartConfig, COUNT_SENTINEL};
use super::types::{BinWidths, Measure, ResolvedChart};

/// Validate `config` and resolve its field names.
///
/// Fails on fields the catalog does not know, on axis or measure fields that
/// the aggregation stage does not produce, on non-COUNT aggregation over a
/// non-numeric field, and on bin widths that are not positive numbers.
pub fn resolve_chart(config: &ChartConfig, catalog: &Catalog) -> Result<ResolvedChart, CompileError> {
    let x = axis_field(catalog, &config.x)?;

    let mut group_by: Vec<&'static Field> = vec![x];
    for name in &config.group_by {
        let field = axis_field(catalog, name)?;
        if !group_by.iter().any(|f| f.name == field.name) {
            group_by.push(field);
        }
    }

    let measure = resolve_measure(config, catalog)?;

    let bins = BinWidths {
        fitness: bin_width("fitnessBinSize", config.fitness_bin_size)?,
        citation_count: bin_width("citationCountBinSize", config.citation_count_bin_size)?,
    };

    Ok(ResolvedChart {
        x,
        group_by,
        direction: config.order_dir,
        measure,
        bins,
    })
}

fn axis_field(catalog: &Catalog, name: &str) -> Result<&'static Field, CompileError> {
    let field = catalog.lookup(name)?;
    if !field.axis {
        return Err(CompileError::InvalidAxisField(name.to_string()));
    }
    Ok(field)
}

fn resolve_measure(config: &ChartConfig, catalog: &Catalog) -> Result<Measure, CompileError> {
    if config.y_field != COUNT_SENTINEL {
        catalog.lookup(&config.y_field)?;
    }
    if config.counts_rows() {
        return Ok(Measure::RowCount);
    }

    let field = catalog.lookup(&config.y_field)?;
    if !field.is_numeric() {
        return Err(CompileError::InvalidAggregation {
            aggregation: config.y_agg,
            field: field.name.to_string(),
        });
    }
    if !field.axis {
        return Err(CompileError::InvalidAxisField(field.name.to_string()));
    }
    Ok(Measure::Aggregate {
        aggregation: config.y_agg,
        field,
    })
}

fn bin_width(name: &'static str, value: f64) -> Result<f64, CompileError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CompileError::InvalidBinWidth { name, value })
    }
}
