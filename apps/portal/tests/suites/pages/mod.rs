mod dashboards;
mod me;
