pub mod a001_calculator;
