pub mod city_select;
pub mod loading;
pub mod message_box;
pub mod temperature_chart;
