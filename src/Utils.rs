//! different utility modules used throughout the project
/// tiny module to save the grid and sample series into file
pub mod logger;
/// tiny module to plot the analyzed curve, its derivatives and the detected
/// feature points
pub mod plots;
