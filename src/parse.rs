pub(crate) mod wire_file;
