pub mod qsccii;
