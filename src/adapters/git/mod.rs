pub mod git_cloner;
