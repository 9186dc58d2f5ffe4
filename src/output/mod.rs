mod koinly_writer;
#[cfg(test)]
mod tests;

pub use koinly_writer::write_koinly_csv;
