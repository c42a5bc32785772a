// Adapters layer: concrete I/O around the matcher (CSV files, JSON reports).

pub mod csv_titles;
