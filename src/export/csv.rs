//! CSV Export functionality
//!
//! Exports a transaction listing with resolved category and account names.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{LensError, LensResult};
use crate::models::{Account, CategoryCatalog, Transaction};

/// Export transactions to CSV
///
/// Uncategorized transactions are listed under the fallback category name;
/// transactions without a known account leave the column empty.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    catalog: &CategoryCatalog,
    accounts: &[Account],
    writer: W,
) -> LensResult<()> {
    let account_names: HashMap<_, _> = accounts.iter().map(|a| (a.id, a.name.as_str())).collect();

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID",
        "Date",
        "Type",
        "Account",
        "Name",
        "Category",
        "Amount",
        "Currency",
    ])?;

    for txn in transactions {
        let account_name = txn
            .account_id
            .and_then(|id| account_names.get(&id).copied())
            .unwrap_or_default();

        csv.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            txn.transaction_type.to_string(),
            account_name.to_string(),
            txn.display_name().to_string(),
            catalog.name_of(txn.category_id.as_ref()).to_string(),
            format!("{:.2}", txn.amount.to_major()),
            txn.currency_code.to_string(),
        ])?;
    }

    csv.flush().map_err(|e| LensError::Export(e.to_string()))?;
    Ok(())
}
