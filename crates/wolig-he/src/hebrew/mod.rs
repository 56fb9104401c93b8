// Hebrew orthography tables shared by the paradigm generators.

pub mod constants;
