use clap::ValueEnum;
use dashtable::SortDirection;

/// Sort directions accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DirectionArg {
	Asc,
	Desc,
}

impl DirectionArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		SortDirection::from(self).as_str()
	}
}

impl From<DirectionArg> for SortDirection {
	fn from(arg: DirectionArg) -> Self {
		match arg {
			DirectionArg::Asc => SortDirection::Asc,
			DirectionArg::Desc => SortDirection::Desc,
		}
	}
}

/// Output formats supported by `--render`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
