mod attribute;
mod precedence;
mod provider;
