//! Common source code fixtures for tests.

// Using directives
pub const ORDERED_IN_NAMESPACE: &str = "namespace Foo
{
    using System;
    using Execute = System.Action;
    using static System.Array;
    using static System.Math;
}
";

pub const ORDERED_IN_MULTIPLE_NAMESPACES: &str = "namespace Foo
{
    using System;
    using Execute = System.Action;
    using static System.Array;
    using static System.Math;
}

namespace Bar
{
    using System;
    using static System.Array;
    using Execute = System.Action;
    using static System.Math;
}
";

pub const ORDERED_IN_COMPILATION_UNIT: &str = "using System;
using static System.Array;
using Execute = System.Action;
using static System.Math;

public class Foo
{
}
";

pub const STATICS_REVERSED_IN_TWO_NAMESPACES: &str = "namespace Foo
{
    using System;
    using Execute = System.Action;
    using static System.Math;
    using static System.Array;
}

namespace Bar
{
    using static System.Math;
    using Execute = System.Action;
    using static System.Array;
    using System;
}
";

pub const STATICS_WITH_INLINE_COMMENTS: &str = "namespace Foo
{
    using System;
    using Execute = System.Action;
    using static /* B */ System.Array;
    using static /* A */ System.Math;
}
";

pub const STATICS_WITH_GLOBAL_PREFIX: &str = "namespace Foo
{
    using System;
    using Execute = System.Action;
    using static System.Math;
    using static global::System.Array;
}
";

// Closing parenthesis placement
pub const METHOD_EMPTY_SPLIT: &str = "
class Foo
{
    public void Bar(
)
    {

    }
}";

pub const CONSTRUCTOR_EMPTY_SPLIT: &str = "
class Foo
{
    public Foo(
)
    {

    }
}";

pub const INVOCATION_EMPTY_SPLIT: &str = "
class Foo
{
    public void Bar()
    {
        var s = ToString(
);
    }
}";

pub const OBJECT_CREATION_EMPTY_SPLIT: &str = "
class Foo
{
    public void Bar()
    {
        var o = new object(
);
    }
}";
