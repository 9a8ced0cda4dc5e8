use crate::huffman::{CodeTable, Symbol};

#[ctor::ctor]
fn init() {
    // the config file is optional outside the repository root
    let _ = log4rs::init_file("log4rs.yaml", Default::default());
}

pub fn log_code_table<S: Symbol>(table: &CodeTable<S>) {
    for (symbol, codeword) in table.iter() {
        log::debug!("{:?} -> {}", symbol, codeword);
    }
}
