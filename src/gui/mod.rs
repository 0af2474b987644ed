/*
 * Desktop front end: input widgets in a side panel, the city graph and found routes on a canvas.
 */

pub mod app;
pub mod canvas;
