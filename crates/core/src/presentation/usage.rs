// crates/core/src/presentation/usage.rs

pub const USAGE: &str = "\
Known FTP commands:

  pwd
  ren <oldname> <newname>
  touch <remotefile>
  gtime <remotefile>
  test <remotefile>
  gattr <remotefile>
  sattr [[-|+]rhsa] <remotefile>
  devs
  dir|ls
  dircnt
  cd <dir>
  lcd <dir>
  !<system command>
  get <remotefile> [localfile]
  put <localfile> [remotefile]
  mget <shellpattern>
  mput <shellpattern>
  del|rm <remotefile>
  mkdir <remotedir>
  rmdir <remotedir>
  prompt
  hash
  bye|quit

Known RPC commands:

  ps
  kill <pid|'all'>...
  run <program> [args]
  killsave <localfile>
  runrestore <localfile>
";
