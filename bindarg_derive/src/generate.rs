mod binding;
mod options;
